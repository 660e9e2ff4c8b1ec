//! The database-agnostic logical query model and its fluent builder.
//!
//! Nothing in this crate renders SQL text. A populated [`query::ast::Query`]
//! is handed to one of the dialect compilers, which reads it and produces
//! parameterized SQL.

pub mod query;

pub use nonempty::NonEmpty;
