//! Type definitions of a low-level SQL string representation.
//!
//! Output is assembled append-only: fixed syntax, quoted identifiers, and
//! `$n` placeholders whose values accumulate in [`Sql::bindings`] in
//! occurrence order. Caller-supplied values never reach the text directly.

use query_compiler_model::query::ast::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sql {
    pub sql: String,
    pub bindings: Vec<Value>,
    /// for internal use and tests only
    pub param_index: u64,
}

impl Default for Sql {
    fn default() -> Self {
        Self::new()
    }
}

impl Sql {
    pub fn new() -> Sql {
        Sql {
            sql: String::new(),
            bindings: vec![],
            param_index: 0,
        }
    }

    /// Append fixed SQL syntax.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a quoted identifier, doubling any embedded quote character.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push('"');
        self.sql.push_str(&identifier.replace('"', "\"\""));
        self.sql.push('"');
    }

    /// Append the next positional placeholder and record its value.
    pub fn append_param(&mut self, value: Value) {
        self.param_index += 1;
        self.sql.push_str(&format!("${}", self.param_index));
        self.bindings.push(value);
    }

    /// The `(sql, bindings)` pair consumed by a statement-execution layer.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.bindings)
    }
}
