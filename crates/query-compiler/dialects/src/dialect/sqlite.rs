//! SQLite dialect.
//!
//! SQLite takes standard `LIMIT`/`OFFSET` but has no bare `OFFSET`: an
//! offset-only query degrades deterministically to `LIMIT -1 OFFSET n`.
//! There is no row-locking clause at all, so lock requests fail fast
//! instead of emitting text the database would reject.

use query_compiler_model::query::ast::{Lock, Query};

use super::Dialect;
use crate::error::Error;
use crate::string::Sql;

pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn lock(&self, sql: &mut Sql, lock: Option<&Lock>) -> Result<(), Error> {
        match lock {
            None => Ok(()),
            Some(Lock::Shared | Lock::Exclusive) => Err(Error::Unsupported {
                dialect: self.name(),
                feature: "row-level locking clauses".to_string(),
            }),
            // Raw lock text is an explicit caller override; pass it through.
            Some(Lock::Raw(clause)) => {
                sql.append_syntax(" ");
                sql.append_syntax(clause);
                Ok(())
            }
        }
    }

    fn limit(&self, sql: &mut Sql, query: &Query) {
        match (query.limit, query.offset) {
            (Some(limit), _) => {
                sql.append_syntax(" LIMIT ");
                sql.append_syntax(&limit.to_string());
            }
            (None, Some(_)) => sql.append_syntax(" LIMIT -1"),
            (None, None) => {}
        }
    }
}
