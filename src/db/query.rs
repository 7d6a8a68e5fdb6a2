//! Bounded query execution
//!
//! Every execution checks a connection out of the session pool, runs
//! exactly one statement under a deadline, and materializes the row
//! stream into display strings. Expiry cancels the in-flight request
//! and surfaces as a timeout failure; it never hangs the caller and
//! never affects unrelated executions.

use crate::db::session::Session;
use crate::db::stringify::row_to_cells;
use crate::db::types::QueryResults;
use crate::error::{DbError, DbResult};
use futures::{TryStreamExt, pin_mut};
use std::time::{Duration, Instant};
use tokio_postgres::Client;
use tokio_postgres::types::ToSql;

/// Deadline for catalog metadata queries (schema/table/column lists)
pub const CATALOG_DEADLINE: Duration = Duration::from_secs(5);

/// Deadline for preview and ad-hoc queries
pub const QUERY_DEADLINE: Duration = Duration::from_secs(30);

/// Execute one query and materialize its full result.
///
/// Headers come from the prepared statement's column descriptors in
/// engine order; rows are converted one at a time off the driver's row
/// stream so the response is never buffered twice. Any row-level decode
/// failure aborts the whole call: the caller gets a complete result or
/// a failure, never both.
pub async fn run_query(session: &Session, sql: &str, deadline: Duration) -> DbResult<QueryResults> {
    let started = Instant::now();
    let client = checkout(session, deadline).await?;
    let token = client.cancel_token();

    let remaining = deadline.saturating_sub(started.elapsed());
    match tokio::time::timeout(remaining, fetch_all(&client, sql)).await {
        Ok(Ok((headers, rows))) => Ok(QueryResults::new(headers, rows, started.elapsed())),
        Ok(Err(e)) => Err(e),
        Err(_) => {
            session.spawn_cancel(token);
            Err(DbError::Timeout(deadline))
        }
    }
}

/// Execute a parameterized catalog metadata query under the catalog
/// deadline, returning raw rows for the caller to scan.
pub(crate) async fn run_catalog(
    session: &Session,
    sql: &str,
    params: &[&(dyn ToSql + Sync)],
) -> DbResult<Vec<tokio_postgres::Row>> {
    let started = Instant::now();
    let client = checkout(session, CATALOG_DEADLINE).await?;
    let token = client.cancel_token();

    let remaining = CATALOG_DEADLINE.saturating_sub(started.elapsed());
    match tokio::time::timeout(remaining, client.query(sql, params)).await {
        Ok(result) => result.map_err(|e| DbError::QueryFailed(e.to_string())),
        Err(_) => {
            session.spawn_cancel(token);
            Err(DbError::Timeout(CATALOG_DEADLINE))
        }
    }
}

/// Pool checkout, bounded by the same deadline as the query itself so a
/// saturated pool cannot hang the caller.
async fn checkout(session: &Session, deadline: Duration) -> DbResult<deadpool_postgres::Object> {
    tokio::time::timeout(deadline, session.checkout())
        .await
        .map_err(|_| DbError::Timeout(deadline))?
}

async fn fetch_all(client: &Client, sql: &str) -> DbResult<(Vec<String>, Vec<Vec<String>>)> {
    let stmt = client
        .prepare(sql)
        .await
        .map_err(|e| DbError::QueryFailed(e.to_string()))?;

    let headers: Vec<String> = stmt.columns().iter().map(|c| c.name().to_string()).collect();

    let stream = client
        .query_raw(&stmt, Vec::<&(dyn ToSql + Sync)>::new())
        .await
        .map_err(|e| DbError::QueryFailed(e.to_string()))?;
    pin_mut!(stream);

    let mut rows = Vec::new();
    while let Some(row) = stream
        .try_next()
        .await
        .map_err(|e| DbError::QueryFailed(e.to_string()))?
    {
        rows.push(row_to_cells(&row)?);
    }

    Ok((headers, rows))
}
