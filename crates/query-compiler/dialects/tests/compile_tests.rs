//! Base-compiler behavior: clause assembly, bindings, and the SQLite
//! degradations.

use nonempty::nonempty;
use query_compiler_dialects::compile::compile;
use query_compiler_dialects::dialect::ansi::Ansi;
use query_compiler_dialects::dialect::sqlite::Sqlite;
use query_compiler_dialects::error::Error;
use query_compiler_model::query::ast::*;
use query_compiler_model::query::helpers::*;

#[test]
fn empty_query_compiles_to_minimal_statement() -> anyhow::Result<()> {
    let (sql, bindings) = compile(&Ansi, &Query::new("users"))?.into_parts();
    assert_eq!(sql, r#"SELECT * FROM "users""#);
    assert_eq!(bindings, vec![]);
    Ok(())
}

#[test]
fn every_clause_assembles_in_order() -> anyhow::Result<()> {
    let query = Query::new("users")
        .select(vec![column("id"), column("name")])
        .and_where(eq(column("active"), value(true)))
        .order_by(column("name"), Some(OrderByDirection::Asc))
        .limit(10)
        .offset(20);

    let (sql, bindings) = compile(&Ansi, &query)?.into_parts();
    insta::assert_snapshot!(
        sql,
        @r#"SELECT "id", "name" FROM "users" WHERE "active" = $1 ORDER BY "name" ASC LIMIT 10 OFFSET 20"#
    );
    assert_eq!(bindings, vec![Value::Bool(true)]);
    Ok(())
}

#[test]
fn joins_render_with_qualified_predicates() -> anyhow::Result<()> {
    let query = Query::new("orders")
        .join(
            JoinKind::Inner,
            "users",
            eq(
                table_column("orders", "user_id"),
                table_column("users", "id"),
            ),
        )
        .join(JoinKind::Left, "invoices", is_null(column("voided_at")));

    let (sql, _) = compile(&Ansi, &query)?.into_parts();
    similar_asserts::assert_eq!(
        sql,
        r#"SELECT * FROM "orders" INNER JOIN "users" ON "orders"."user_id" = "users"."id" LEFT JOIN "invoices" ON "voided_at" IS NULL"#
    );
    Ok(())
}

#[test]
fn nested_groups_parenthesize_and_keep_connectives() -> anyhow::Result<()> {
    let query = Query::new("t")
        .and_where(eq(column("a"), value(1)))
        .and_where(group(nonempty![
            and(eq(column("b"), value(2))),
            or(eq(column("c"), value(3))),
        ]));

    let (sql, bindings) = compile(&Ansi, &query)?.into_parts();
    similar_asserts::assert_eq!(
        sql,
        r#"SELECT * FROM "t" WHERE "a" = $1 AND ("b" = $2 OR "c" = $3)"#
    );
    assert_eq!(
        bindings,
        vec![Value::Int(1), Value::Int(2), Value::Int(3)]
    );
    Ok(())
}

#[test]
fn group_by_and_having_render_after_where() -> anyhow::Result<()> {
    let query = Query::new("orders")
        .select(vec![column("status")])
        .and_where(is_not_null(column("user_id")))
        .group_by(column("status"))
        .and_having(gt(column("total"), value(100)));

    let (sql, _) = compile(&Ansi, &query)?.into_parts();
    similar_asserts::assert_eq!(
        sql,
        r#"SELECT "status" FROM "orders" WHERE "user_id" IS NOT NULL GROUP BY "status" HAVING "total" > $1"#
    );
    Ok(())
}

#[test]
fn bindings_follow_placeholder_occurrence_order() -> anyhow::Result<()> {
    let query = Query::new("t")
        .and_where(eq(column("a"), value("first")))
        .and_where(in_list(
            column("b"),
            nonempty![Value::Int(2), Value::Int(3)],
        ))
        .or_where(not_eq(column("c"), value("last")));

    let (sql, bindings) = compile(&Ansi, &query)?.into_parts();
    similar_asserts::assert_eq!(
        sql,
        r#"SELECT * FROM "t" WHERE "a" = $1 AND "b" IN ($2, $3) OR "c" <> $4"#
    );
    assert_eq!(
        bindings,
        vec![
            Value::String("first".to_string()),
            Value::Int(2),
            Value::Int(3),
            Value::String("last".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn compiling_twice_is_byte_identical() -> anyhow::Result<()> {
    let query = Query::new("users")
        .column(json_get(column_ref("doc"), path(vec![key("a"), index(0)])))
        .and_where(in_list(column("id"), nonempty![Value::Int(1), Value::Int(2)]))
        .order_by(column("id"), Some(OrderByDirection::Desc))
        .limit(5);

    let first = compile(&Ansi, &query)?;
    let second = compile(&Ansi, &query)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn base_json_access_uses_json_extract() -> anyhow::Result<()> {
    let query = Query::new("events").column(json_get(
        column_ref("doc"),
        path(vec![key("a"), index(0), key("b")]),
    ));

    let (sql, _) = compile(&Ansi, &query)?.into_parts();
    similar_asserts::assert_eq!(sql, r#"SELECT JSON_EXTRACT("doc", '$.a[0].b') FROM "events""#);
    Ok(())
}

#[test]
fn base_lock_modes_are_distinct() -> anyhow::Result<()> {
    let shared = compile(&Ansi, &Query::new("t").lock(Lock::Shared))?.into_parts().0;
    let exclusive = compile(&Ansi, &Query::new("t").lock(Lock::Exclusive))?
        .into_parts()
        .0;

    assert_eq!(shared, r#"SELECT * FROM "t" FOR SHARE"#);
    assert_eq!(exclusive, r#"SELECT * FROM "t" FOR UPDATE"#);
    Ok(())
}

#[test]
fn base_offset_without_limit_is_permitted() -> anyhow::Result<()> {
    let (sql, _) = compile(&Ansi, &Query::new("t").offset(20))?.into_parts();
    assert_eq!(sql, r#"SELECT * FROM "t" OFFSET 20"#);
    Ok(())
}

#[test]
fn sqlite_degrades_bare_offset() -> anyhow::Result<()> {
    let (sql, _) = compile(&Sqlite, &Query::new("t").offset(20))?.into_parts();
    assert_eq!(sql, r#"SELECT * FROM "t" LIMIT -1 OFFSET 20"#);

    let (sql, _) = compile(&Sqlite, &Query::new("t").limit(10).offset(20))?.into_parts();
    assert_eq!(sql, r#"SELECT * FROM "t" LIMIT 10 OFFSET 20"#);
    Ok(())
}

#[test]
fn sqlite_rejects_lock_modes_it_cannot_express() {
    let result = compile(&Sqlite, &Query::new("t").lock(Lock::Exclusive));
    assert_eq!(
        result,
        Err(Error::Unsupported {
            dialect: "sqlite",
            feature: "row-level locking clauses".to_string(),
        })
    );
}

#[test]
fn sqlite_passes_raw_lock_text_through() -> anyhow::Result<()> {
    let query = Query::new("t").lock(Lock::Raw("/* advisory */".to_string()));
    let (sql, _) = compile(&Sqlite, &query)?.into_parts();
    assert_eq!(sql, r#"SELECT * FROM "t" /* advisory */"#);
    Ok(())
}

#[test]
fn identifiers_with_embedded_quotes_stay_quoted() -> anyhow::Result<()> {
    let query = Query::new(r#"odd"name"#).column(column(r#"col"umn"#));
    let (sql, _) = compile(&Ansi, &query)?.into_parts();
    assert_eq!(sql, r#"SELECT "col""umn" FROM "odd""name""#);
    Ok(())
}
