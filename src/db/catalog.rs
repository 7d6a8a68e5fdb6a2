//! Catalog metadata queries
//!
//! Read-only `information_schema` lookups backing the schema/table/column
//! panes. All three run under the catalog deadline.

use crate::db::query::run_catalog;
use crate::db::session::Session;
use crate::db::types::ColumnInfo;
use crate::error::DbResult;

/// List non-system schema names, sorted lexicographically.
pub async fn list_schemas(session: &Session) -> DbResult<Vec<String>> {
    let rows = run_catalog(
        session,
        "SELECT schema_name \
         FROM information_schema.schemata \
         WHERE schema_name NOT IN ('pg_toast', 'pg_temp_1', 'pg_toast_temp_1') \
         ORDER BY schema_name",
        &[],
    )
    .await?;

    let mut schemas: Vec<String> = rows.iter().map(|r| r.get(0)).collect();
    schemas.sort();
    Ok(schemas)
}

/// List base tables for a schema, in catalog order (views and system
/// relations excluded).
pub async fn list_tables(session: &Session, schema: &str) -> DbResult<Vec<String>> {
    let rows = run_catalog(
        session,
        "SELECT table_name \
         FROM information_schema.tables \
         WHERE table_schema = $1 AND table_type = 'BASE TABLE' \
         ORDER BY table_name",
        &[&schema],
    )
    .await?;

    Ok(rows.iter().map(|r| r.get(0)).collect())
}

/// List a table's columns ordered by ordinal position, the table's
/// physical column order (not alphabetical).
pub async fn list_columns(
    session: &Session,
    schema: &str,
    table: &str,
) -> DbResult<Vec<ColumnInfo>> {
    let rows = run_catalog(
        session,
        "SELECT column_name, data_type, is_nullable \
         FROM information_schema.columns \
         WHERE table_schema = $1 AND table_name = $2 \
         ORDER BY ordinal_position",
        &[&schema, &table],
    )
    .await?;

    Ok(rows
        .iter()
        .map(|r| ColumnInfo {
            name: r.get(0),
            data_type: r.get(1),
            is_nullable: r.get(2),
        })
        .collect())
}
