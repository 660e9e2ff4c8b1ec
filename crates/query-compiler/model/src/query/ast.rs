//! Type definitions of the logical query model.
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

/// A single logical `SELECT` statement under construction.
///
/// Built incrementally by the fluent methods in [`super::builder`] and read
/// (never mutated) by a dialect compiler. Clause order is insertion order,
/// so compiling the same query always yields the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub table: TableName,
    /// Selected column expressions. Empty means `SELECT *`.
    pub columns: Vec<Expression>,
    pub joins: Vec<Join>,
    pub wheres: Vec<WhereClause>,
    pub groupings: Vec<Expression>,
    pub havings: Vec<WhereClause>,
    pub orderings: Vec<Ordering>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub lock: Option<Lock>,
}

/// The target relation of a query or join.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableName(pub String);

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableName,
    pub on: Predicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

/// One entry in a `WHERE` or `HAVING` list. The connective says how the
/// entry attaches to the clause before it; the first entry's connective is
/// ignored when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhereClause {
    pub connective: Connective,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connective {
    And,
    Or,
}

/// A predicate tree. Groups nest arbitrarily and are kept non-empty by
/// construction, so a join or group can never carry a vacuous condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    Comparison {
        left: Expression,
        operator: Comparison,
        right: Expression,
    },
    In {
        target: Expression,
        values: NonEmpty<Value>,
    },
    IsNull {
        target: Expression,
        negated: bool,
    },
    Group(Box<NonEmpty<WhereClause>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
    NotLike,
}

/// A scalar expression usable in select lists, predicates and orderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    Column(ColumnRef),
    /// A caller-supplied value; always compiled to a placeholder, never to
    /// literal text.
    Value(Value),
    /// Extraction of a value inside a JSON document column. The rendering
    /// of the path and the extraction function are dialect extension points.
    JsonGet { column: ColumnRef, path: JsonPath },
}

/// A possibly table-qualified column reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub name: String,
}

/// An ordered path into a JSON document, owned by a single
/// [`Expression::JsonGet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JsonPath {
    pub segments: Vec<PathSegment>,
}

/// The segment kind decides its rendering token: `.key` vs `[index]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    Key(String),
    Index(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    pub target: Expression,
    pub direction: Option<OrderByDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// Row-locking request. `Raw` carries dialect-specific clause text verbatim;
/// absence of a lock is `Option::None` on [`Query::lock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lock {
    Shared,
    Exclusive,
    Raw(String),
}

/// A bindable scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Bool(bool),
    String(String),
    Null,
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
