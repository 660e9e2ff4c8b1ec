//! The dialect-neutral baseline: every extension point keeps its default.

use super::Dialect;

pub struct Ansi;

impl Dialect for Ansi {
    fn name(&self) -> &'static str {
        "ansi"
    }
}
