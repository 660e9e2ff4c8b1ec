//! The dialect contract: a fixed set of named extension points over the
//! shared compilation algorithm.
//!
//! Default method bodies carry the dialect-neutral behavior, so a dialect
//! overrides exactly the fragments whose syntax diverges and inherits the
//! rest unchanged.

pub mod ansi;
pub mod oracle;
pub mod sqlite;

use enum_iterator::Sequence;
use query_compiler_model::query::ast::{ColumnRef, JsonPath, Lock, PathSegment, Query};

use crate::compile;
use crate::error::Error;
use crate::string::Sql;

pub trait Dialect: Send + Sync {
    /// The driver identifier this dialect answers to, also used to
    /// attribute unsupported-feature errors.
    fn name(&self) -> &'static str;

    /// Render a JSON path literal: `$`-prefixed, `.key` for key segments,
    /// `[index]` for index segments, with every single quote doubled so the
    /// result stays safe inside a quoted SQL string literal.
    fn json_path(&self, path: &JsonPath) -> String {
        let mut rendered = String::from("$");
        for segment in &path.segments {
            match segment {
                PathSegment::Key(k) => {
                    rendered.push('.');
                    rendered.push_str(k);
                }
                PathSegment::Index(i) => {
                    rendered.push('[');
                    rendered.push_str(&i.to_string());
                    rendered.push(']');
                }
            }
        }
        rendered.replace('\'', "''")
    }

    /// Render extraction of the JSON value at `path` inside `column`.
    fn json_get(&self, sql: &mut Sql, column: &ColumnRef, path: &JsonPath) {
        sql.append_syntax("JSON_EXTRACT(");
        compile::column_to_sql(column, sql);
        sql.append_syntax(", '");
        sql.append_syntax(&self.json_path(path));
        sql.append_syntax("')");
    }

    /// Render the row-locking clause, leading space included. A dialect
    /// that cannot express the requested mode must degrade deterministically
    /// or return [`Error::Unsupported`], never emit approximate text.
    fn lock(&self, sql: &mut Sql, lock: Option<&Lock>) -> Result<(), Error> {
        match lock {
            None => {}
            Some(Lock::Shared) => sql.append_syntax(" FOR SHARE"),
            Some(Lock::Exclusive) => sql.append_syntax(" FOR UPDATE"),
            Some(Lock::Raw(clause)) => {
                sql.append_syntax(" ");
                sql.append_syntax(clause);
            }
        }
        Ok(())
    }

    /// Render the `ORDER BY` clause. The base emits nothing when no
    /// orderings were given, leaving pagination determinism to the dialect.
    fn order_by(&self, sql: &mut Sql, query: &Query) {
        compile::order_by_to_sql(self, &query.orderings, sql);
    }

    /// Render the limit fragment, leading space included.
    fn limit(&self, sql: &mut Sql, query: &Query) {
        if let Some(limit) = query.limit {
            sql.append_syntax(" LIMIT ");
            sql.append_syntax(&limit.to_string());
        }
    }

    /// Render the offset fragment, leading space included. Offset without
    /// limit is valid here; a dialect with no equivalent syntax must fail
    /// rather than guess.
    fn offset(&self, sql: &mut Sql, query: &Query) -> Result<(), Error> {
        if let Some(offset) = query.offset {
            sql.append_syntax(" OFFSET ");
            sql.append_syntax(&offset.to_string());
        }
        Ok(())
    }
}

/// The closed set of shipped dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum DialectKind {
    Ansi,
    Oracle,
    Sqlite,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::Ansi => &ansi::Ansi,
            DialectKind::Oracle => &oracle::Oracle,
            DialectKind::Sqlite => &sqlite::Sqlite,
        }
    }

    pub fn driver(self) -> &'static str {
        self.dialect().name()
    }
}

/// Map a configured database driver identifier to its compiler.
pub fn for_driver(driver: &str) -> Result<&'static dyn Dialect, Error> {
    enum_iterator::all::<DialectKind>()
        .find(|kind| kind.driver() == driver)
        .map(DialectKind::dialect)
        .ok_or_else(|| Error::UnknownDriver(driver.to_string()))
}
