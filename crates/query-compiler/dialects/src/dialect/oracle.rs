//! Oracle-style dialect.
//!
//! Diverges from the baseline in four places: JSON extraction goes through
//! `JSON_VALUE`, shared and exclusive locks collapse to `FOR UPDATE`,
//! pagination uses the SQL:2008 fetch clause instead of `LIMIT`, and
//! paginated queries without an explicit ordering get a no-op deterministic
//! one because the fetch clause needs a defined order to be stable.

use query_compiler_model::query::ast::{ColumnRef, JsonPath, Lock, Query};

use super::Dialect;
use crate::compile;
use crate::error::Error;
use crate::string::Sql;

pub struct Oracle;

impl Dialect for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn json_get(&self, sql: &mut Sql, column: &ColumnRef, path: &JsonPath) {
        sql.append_syntax("JSON_VALUE(");
        compile::column_to_sql(column, sql);
        sql.append_syntax(", '");
        sql.append_syntax(&self.json_path(path));
        sql.append_syntax("')");
    }

    /// No distinct shared-lock syntax: both modes render `FOR UPDATE`.
    fn lock(&self, sql: &mut Sql, lock: Option<&Lock>) -> Result<(), Error> {
        match lock {
            None => {}
            Some(Lock::Shared | Lock::Exclusive) => sql.append_syntax(" FOR UPDATE"),
            Some(Lock::Raw(clause)) => {
                sql.append_syntax(" ");
                sql.append_syntax(clause);
            }
        }
        Ok(())
    }

    fn order_by(&self, sql: &mut Sql, query: &Query) {
        if query.orderings.is_empty() && (query.limit.is_some() || query.offset.is_some()) {
            sql.append_syntax(" ORDER BY (SELECT 0)");
        } else {
            compile::order_by_to_sql(self, &query.orderings, sql);
        }
    }

    /// Limit-only pagination. The limit-and-offset case is rendered as one
    /// fragment by [`Oracle::offset`]; the four (limit, offset) cases are
    /// mutually exclusive.
    fn limit(&self, sql: &mut Sql, query: &Query) {
        if let (Some(limit), None) = (query.limit, query.offset) {
            sql.append_syntax(" FETCH FIRST ");
            sql.append_syntax(&limit.to_string());
            sql.append_syntax(" ROWS ONLY");
        }
    }

    fn offset(&self, sql: &mut Sql, query: &Query) -> Result<(), Error> {
        match (query.limit, query.offset) {
            (Some(limit), Some(offset)) => {
                sql.append_syntax(" OFFSET ");
                sql.append_syntax(&offset.to_string());
                sql.append_syntax(" ROWS FETCH NEXT ");
                sql.append_syntax(&limit.to_string());
                sql.append_syntax(" ROWS ONLY");
            }
            (None, Some(offset)) => {
                sql.append_syntax(" OFFSET ");
                sql.append_syntax(&offset.to_string());
                sql.append_syntax(" ROWS");
            }
            (_, None) => {}
        }
        Ok(())
    }
}
