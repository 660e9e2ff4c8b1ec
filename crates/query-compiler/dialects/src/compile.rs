//! The shared compilation algorithm: walk a query model and render each
//! clause into the SQL buffer, deferring to the dialect at every extension
//! point.

use query_compiler_model::query::ast::*;

use crate::dialect::Dialect;
use crate::error::Error;
use crate::string::Sql;

/// Compile `query` for `dialect`, producing SQL text and its bindings.
///
/// Stateless across calls: the query is only borrowed for the duration of
/// this function. Compiling the same query twice yields identical output.
pub fn compile<D: Dialect + ?Sized>(dialect: &D, query: &Query) -> Result<Sql, Error> {
    tracing::debug!(dialect = dialect.name(), table = %query.table, "compiling query");

    let mut sql = Sql::new();

    sql.append_syntax("SELECT ");
    select_list_to_sql(dialect, &query.columns, &mut sql);

    sql.append_syntax(" FROM ");
    sql.append_identifier(&query.table.0);

    for join in &query.joins {
        join_to_sql(dialect, join, &mut sql);
    }

    if !query.wheres.is_empty() {
        sql.append_syntax(" WHERE ");
        clauses_to_sql(dialect, &query.wheres, &mut sql);
    }

    if !query.groupings.is_empty() {
        sql.append_syntax(" GROUP BY ");
        for (index, grouping) in query.groupings.iter().enumerate() {
            expression_to_sql(dialect, grouping, &mut sql);
            if index < (query.groupings.len() - 1) {
                sql.append_syntax(", ");
            }
        }
    }

    if !query.havings.is_empty() {
        sql.append_syntax(" HAVING ");
        clauses_to_sql(dialect, &query.havings, &mut sql);
    }

    dialect.order_by(&mut sql, query);
    dialect.limit(&mut sql, query);
    dialect.offset(&mut sql, query)?;
    dialect.lock(&mut sql, query.lock.as_ref())?;

    Ok(sql)
}

fn select_list_to_sql<D: Dialect + ?Sized>(dialect: &D, columns: &[Expression], sql: &mut Sql) {
    if columns.is_empty() {
        sql.append_syntax("*");
    } else {
        for (index, column) in columns.iter().enumerate() {
            expression_to_sql(dialect, column, sql);
            if index < (columns.len() - 1) {
                sql.append_syntax(", ");
            }
        }
    }
}

fn join_to_sql<D: Dialect + ?Sized>(dialect: &D, join: &Join, sql: &mut Sql) {
    match join.kind {
        JoinKind::Inner => sql.append_syntax(" INNER JOIN "),
        JoinKind::Left => sql.append_syntax(" LEFT JOIN "),
        JoinKind::Right => sql.append_syntax(" RIGHT JOIN "),
        JoinKind::Full => sql.append_syntax(" FULL JOIN "),
    }
    sql.append_identifier(&join.table.0);
    sql.append_syntax(" ON ");
    predicate_to_sql(dialect, &join.on, sql);
}

/// Render a clause list, joining successive entries with each entry's own
/// connective. The first entry's connective is ignored.
pub(crate) fn clauses_to_sql<'a, D, I>(dialect: &D, clauses: I, sql: &mut Sql)
where
    D: Dialect + ?Sized,
    I: IntoIterator<Item = &'a WhereClause>,
{
    for (index, clause) in clauses.into_iter().enumerate() {
        if index > 0 {
            match clause.connective {
                Connective::And => sql.append_syntax(" AND "),
                Connective::Or => sql.append_syntax(" OR "),
            }
        }
        predicate_to_sql(dialect, &clause.predicate, sql);
    }
}

fn predicate_to_sql<D: Dialect + ?Sized>(dialect: &D, predicate: &Predicate, sql: &mut Sql) {
    match predicate {
        Predicate::Comparison {
            left,
            operator,
            right,
        } => {
            expression_to_sql(dialect, left, sql);
            comparison_to_sql(operator, sql);
            expression_to_sql(dialect, right, sql);
        }
        Predicate::In { target, values } => {
            expression_to_sql(dialect, target, sql);
            sql.append_syntax(" IN (");
            for (index, value) in values.iter().enumerate() {
                sql.append_param(value.clone());
                if index < (values.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
            sql.append_syntax(")");
        }
        Predicate::IsNull { target, negated } => {
            expression_to_sql(dialect, target, sql);
            if *negated {
                sql.append_syntax(" IS NOT NULL");
            } else {
                sql.append_syntax(" IS NULL");
            }
        }
        Predicate::Group(clauses) => {
            sql.append_syntax("(");
            clauses_to_sql(dialect, clauses.iter(), sql);
            sql.append_syntax(")");
        }
    }
}

fn comparison_to_sql(operator: &Comparison, sql: &mut Sql) {
    match operator {
        Comparison::Equals => sql.append_syntax(" = "),
        Comparison::NotEquals => sql.append_syntax(" <> "),
        Comparison::GreaterThan => sql.append_syntax(" > "),
        Comparison::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
        Comparison::LessThan => sql.append_syntax(" < "),
        Comparison::LessThanOrEqualTo => sql.append_syntax(" <= "),
        Comparison::Like => sql.append_syntax(" LIKE "),
        Comparison::NotLike => sql.append_syntax(" NOT LIKE "),
    }
}

pub(crate) fn expression_to_sql<D: Dialect + ?Sized>(
    dialect: &D,
    expression: &Expression,
    sql: &mut Sql,
) {
    match expression {
        Expression::Column(column) => column_to_sql(column, sql),
        Expression::Value(value) => sql.append_param(value.clone()),
        Expression::JsonGet { column, path } => dialect.json_get(sql, column, path),
    }
}

pub(crate) fn column_to_sql(column: &ColumnRef, sql: &mut Sql) {
    if let Some(table) = &column.table {
        sql.append_identifier(table);
        sql.append_syntax(".");
    }
    sql.append_identifier(&column.name);
}

/// The dialect-default `ORDER BY` clause: nothing when no orderings were
/// given. Dialect overrides fall through to this for the explicit case.
pub(crate) fn order_by_to_sql<D: Dialect + ?Sized>(
    dialect: &D,
    orderings: &[Ordering],
    sql: &mut Sql,
) {
    if !orderings.is_empty() {
        sql.append_syntax(" ORDER BY ");
        for (index, ordering) in orderings.iter().enumerate() {
            expression_to_sql(dialect, &ordering.target, sql);
            match ordering.direction {
                None => {}
                Some(OrderByDirection::Asc) => sql.append_syntax(" ASC"),
                Some(OrderByDirection::Desc) => sql.append_syntax(" DESC"),
            }
            if index < (orderings.len() - 1) {
                sql.append_syntax(", ");
            }
        }
    }
}
