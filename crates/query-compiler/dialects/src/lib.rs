//! Compilation of the logical query model into dialect-specific SQL text
//! plus an ordered list of bound values.
//!
//! The shared algorithm lives in [`compile`]; per-database syntax variation
//! goes through the extension points on [`dialect::Dialect`]. Compilation is
//! pure and synchronous, and the query is always an explicit argument, so a
//! single dialect instance can be shared across threads freely.

pub mod compile;
pub mod dialect;
pub mod error;
pub mod string;
