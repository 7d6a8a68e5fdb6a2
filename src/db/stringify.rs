//! Row value stringification
//!
//! Converts a wire-format row into display strings, driven by each
//! column's PostgreSQL type. SQL NULL always becomes the literal `NULL`,
//! keeping it distinguishable from an empty string.

use crate::error::DbError;
use rust_decimal::Decimal;
use tokio_postgres::Row;
use tokio_postgres::types::{FromSql, Type};

/// Convert every column of a row into its display string.
///
/// A cell whose value cannot be decoded by any strategy aborts the row
/// (and, at the caller, the whole query) with `DbError::RowDecode`;
/// partial rows are never surfaced.
pub fn row_to_cells(row: &Row) -> Result<Vec<String>, DbError> {
    let mut cells = Vec::with_capacity(row.len());
    for (idx, column) in row.columns().iter().enumerate() {
        cells.push(cell_to_string(row, idx, column.type_())?);
    }
    Ok(cells)
}

fn cell_to_string(row: &Row, idx: usize, pg_type: &Type) -> Result<String, DbError> {
    match *pg_type {
        Type::BOOL => typed::<bool>(row, idx),
        Type::INT2 => typed::<i16>(row, idx),
        Type::INT4 => typed::<i32>(row, idx),
        Type::INT8 => typed::<i64>(row, idx),
        Type::FLOAT4 => typed::<f32>(row, idx),
        Type::FLOAT8 => typed::<f64>(row, idx),
        Type::NUMERIC => typed::<Decimal>(row, idx),
        Type::UUID => typed::<uuid::Uuid>(row, idx),
        Type::JSON | Type::JSONB => typed::<serde_json::Value>(row, idx),
        Type::DATE => typed::<chrono::NaiveDate>(row, idx),
        Type::TIME => typed::<chrono::NaiveTime>(row, idx),
        Type::TIMESTAMP => typed::<chrono::NaiveDateTime>(row, idx),
        Type::TIMESTAMPTZ => typed::<chrono::DateTime<chrono::Utc>>(row, idx),
        Type::BYTEA => match row.try_get::<_, Option<Vec<u8>>>(idx) {
            Ok(Some(bytes)) => Ok(format!("<binary {} bytes>", bytes.len())),
            Ok(None) => Ok("NULL".to_string()),
            Err(_) => fallback(row, idx),
        },
        Type::BOOL_ARRAY => typed_array::<bool>(row, idx),
        Type::INT2_ARRAY => typed_array::<i16>(row, idx),
        Type::INT4_ARRAY => typed_array::<i32>(row, idx),
        Type::INT8_ARRAY => typed_array::<i64>(row, idx),
        Type::FLOAT4_ARRAY => typed_array::<f32>(row, idx),
        Type::FLOAT8_ARRAY => typed_array::<f64>(row, idx),
        Type::NUMERIC_ARRAY => typed_array::<Decimal>(row, idx),
        Type::UUID_ARRAY => typed_array::<uuid::Uuid>(row, idx),
        Type::TEXT_ARRAY | Type::VARCHAR_ARRAY | Type::NAME_ARRAY => {
            typed_array::<String>(row, idx)
        }
        // Text types and everything without a dedicated Rust mapping
        _ => fallback(row, idx),
    }
}

fn typed<'a, T>(row: &'a Row, idx: usize) -> Result<String, DbError>
where
    T: FromSql<'a> + ToString,
{
    match row.try_get::<_, Option<T>>(idx) {
        Ok(Some(v)) => Ok(v.to_string()),
        Ok(None) => Ok("NULL".to_string()),
        Err(_) => fallback(row, idx),
    }
}

fn typed_array<'a, T>(row: &'a Row, idx: usize) -> Result<String, DbError>
where
    T: FromSql<'a> + ToString,
{
    match row.try_get::<_, Option<Vec<T>>>(idx) {
        Ok(Some(items)) => {
            let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
            Ok(format!("{{{}}}", parts.join(",")))
        }
        Ok(None) => Ok("NULL".to_string()),
        Err(_) => fallback(row, idx),
    }
}

/// Last resort: extract as text. Only fails for types the driver cannot
/// hand over as a string, which surfaces as a row-decode failure.
fn fallback(row: &Row, idx: usize) -> Result<String, DbError> {
    match row.try_get::<_, Option<String>>(idx) {
        Ok(Some(v)) => Ok(v),
        Ok(None) => Ok("NULL".to_string()),
        Err(_) => {
            let column = row.columns().get(idx);
            Err(DbError::RowDecode {
                column: column.map_or_else(|| idx.to_string(), |c| c.name().to_string()),
                pg_type: column.map_or_else(|| "unknown".to_string(), |c| c.type_().to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Row construction needs a live connection; the NULL-literal and
    // array-brace behavior is covered end to end in tests/queries.rs.

    #[test]
    fn test_row_decode_error_names_column() {
        let err = DbError::RowDecode {
            column: "tsrange_col".to_string(),
            pg_type: "tsrange".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not decode column tsrange_col (tsrange)"
        );
    }
}
