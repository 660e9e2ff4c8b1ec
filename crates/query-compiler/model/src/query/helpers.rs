//! Helpers for building query model values in certain shapes and patterns.

use nonempty::NonEmpty;

use super::ast::*;

// Expressions //

/// An unqualified column expression.
pub fn column(name: impl Into<String>) -> Expression {
    Expression::Column(column_ref(name))
}

/// A table-qualified column expression.
pub fn table_column(table: impl Into<String>, name: impl Into<String>) -> Expression {
    Expression::Column(ColumnRef {
        table: Some(table.into()),
        name: name.into(),
    })
}

pub fn column_ref(name: impl Into<String>) -> ColumnRef {
    ColumnRef {
        table: None,
        name: name.into(),
    }
}

/// A bindable value expression.
pub fn value(value: impl Into<Value>) -> Expression {
    Expression::Value(value.into())
}

/// Extraction of a JSON value at `path` inside a document column.
pub fn json_get(column: ColumnRef, path: JsonPath) -> Expression {
    Expression::JsonGet { column, path }
}

// JSON paths //

pub fn path(segments: Vec<PathSegment>) -> JsonPath {
    JsonPath { segments }
}

pub fn key(key: impl Into<String>) -> PathSegment {
    PathSegment::Key(key.into())
}

pub fn index(index: u64) -> PathSegment {
    PathSegment::Index(index)
}

// Predicates //

fn comparison(left: Expression, operator: Comparison, right: Expression) -> Predicate {
    Predicate::Comparison {
        left,
        operator,
        right,
    }
}

pub fn eq(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::Equals, right)
}

pub fn not_eq(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::NotEquals, right)
}

pub fn gt(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::GreaterThan, right)
}

pub fn gte(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::GreaterThanOrEqualTo, right)
}

pub fn lt(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::LessThan, right)
}

pub fn lte(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::LessThanOrEqualTo, right)
}

pub fn like(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::Like, right)
}

pub fn not_like(left: Expression, right: Expression) -> Predicate {
    comparison(left, Comparison::NotLike, right)
}

/// Membership in a non-empty value list.
pub fn in_list(target: Expression, values: NonEmpty<Value>) -> Predicate {
    Predicate::In { target, values }
}

pub fn is_null(target: Expression) -> Predicate {
    Predicate::IsNull {
        target,
        negated: false,
    }
}

pub fn is_not_null(target: Expression) -> Predicate {
    Predicate::IsNull {
        target,
        negated: true,
    }
}

/// A parenthesized, non-empty group of clauses.
pub fn group(clauses: NonEmpty<WhereClause>) -> Predicate {
    Predicate::Group(Box::new(clauses))
}

/// Attach a predicate to the preceding clause with `AND`.
pub fn and(predicate: Predicate) -> WhereClause {
    WhereClause {
        connective: Connective::And,
        predicate,
    }
}

/// Attach a predicate to the preceding clause with `OR`.
pub fn or(predicate: Predicate) -> WhereClause {
    WhereClause {
        connective: Connective::Or,
        predicate,
    }
}
