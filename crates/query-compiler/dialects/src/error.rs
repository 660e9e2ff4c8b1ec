//! Errors surfaced while compiling a query.
//!
//! A structurally valid query never fails under the baseline dialect.
//! Failures are either a dialect refusing a construct it has no syntax for
//! (rather than emitting best-effort wrong text) or an unrecognized driver
//! name at dialect selection.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the '{dialect}' dialect cannot express {feature}")]
    Unsupported {
        dialect: &'static str,
        feature: String,
    },
    #[error("unrecognized database driver '{0}'")]
    UnknownDriver(String),
}
