//! The logical query model: AST types, fluent builder, construction helpers.

pub mod ast;
pub mod builder;
pub mod helpers;
