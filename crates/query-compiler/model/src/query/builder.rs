//! Fluent construction of [`Query`] values.
//!
//! Builder methods take the query by value and hand it back, so chains read
//! top to bottom. No method escapes identifiers or validates them; that
//! happens at compile time in the dialect crate. States that would be
//! contract violations (negative limits, empty `IN` lists, empty predicate
//! groups) are unconstructible at the type level rather than checked here.

use super::ast::*;

impl Query {
    /// A query over `table` with every clause empty. Compiles to the
    /// minimal valid statement for the chosen dialect.
    pub fn new(table: impl Into<String>) -> Self {
        Query {
            table: TableName(table.into()),
            columns: vec![],
            joins: vec![],
            wheres: vec![],
            groupings: vec![],
            havings: vec![],
            orderings: vec![],
            limit: None,
            offset: None,
            lock: None,
        }
    }

    /// Replace the select list wholesale.
    #[must_use]
    pub fn select(mut self, columns: Vec<Expression>) -> Self {
        self.columns = columns;
        self
    }

    /// Append one expression to the select list.
    #[must_use]
    pub fn column(mut self, column: Expression) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn join(mut self, kind: JoinKind, table: impl Into<String>, on: Predicate) -> Self {
        self.joins.push(Join {
            kind,
            table: TableName(table.into()),
            on,
        });
        self
    }

    #[must_use]
    pub fn and_where(mut self, predicate: Predicate) -> Self {
        self.wheres.push(WhereClause {
            connective: Connective::And,
            predicate,
        });
        self
    }

    #[must_use]
    pub fn or_where(mut self, predicate: Predicate) -> Self {
        self.wheres.push(WhereClause {
            connective: Connective::Or,
            predicate,
        });
        self
    }

    #[must_use]
    pub fn group_by(mut self, grouping: Expression) -> Self {
        self.groupings.push(grouping);
        self
    }

    #[must_use]
    pub fn and_having(mut self, predicate: Predicate) -> Self {
        self.havings.push(WhereClause {
            connective: Connective::And,
            predicate,
        });
        self
    }

    #[must_use]
    pub fn or_having(mut self, predicate: Predicate) -> Self {
        self.havings.push(WhereClause {
            connective: Connective::Or,
            predicate,
        });
        self
    }

    #[must_use]
    pub fn order_by(mut self, target: Expression, direction: Option<OrderByDirection>) -> Self {
        self.orderings.push(Ordering { target, direction });
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn lock(mut self, lock: Lock) -> Self {
        self.lock = Some(lock);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::super::helpers::*;
    use super::*;

    #[test]
    fn builder_preserves_insertion_order() {
        let query = Query::new("users")
            .and_where(eq(column("a"), value(1)))
            .or_where(eq(column("b"), value(2)))
            .and_where(eq(column("c"), value(3)));

        assert_eq!(query.wheres.len(), 3);
        assert_eq!(query.wheres[0].connective, Connective::And);
        assert_eq!(query.wheres[1].connective, Connective::Or);
        assert_eq!(query.wheres[2].connective, Connective::And);
        assert_eq!(
            query.wheres[1].predicate,
            eq(column("b"), value(2)),
        );
    }

    #[test]
    fn select_replaces_and_column_appends() {
        let query = Query::new("users")
            .select(vec![column("id")])
            .select(vec![column("name")])
            .column(column("email"));

        assert_eq!(query.columns, vec![column("name"), column("email")]);
    }

    #[test]
    fn later_mutations_win() {
        let query = Query::new("users").limit(5).limit(10).lock(Lock::Shared);

        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, None);
        assert_eq!(query.lock, Some(Lock::Shared));
    }

    #[test]
    fn query_round_trips_through_serde() {
        let query = Query::new("events")
            .column(json_get(column_ref("payload"), path(vec![key("a"), index(0)])))
            .join(
                JoinKind::Left,
                "users",
                eq(table_column("events", "user_id"), table_column("users", "id")),
            )
            .and_where(in_list(column("status"), nonempty::nonempty![
                Value::from("new"),
                Value::from("open"),
            ]))
            .order_by(column("id"), Some(OrderByDirection::Desc))
            .limit(10);

        let encoded = serde_json::to_string(&query).unwrap();
        let decoded: Query = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, query);
    }
}
