//! SQL for the `transactions` table.

use crate::errors::{AppError, AppResult};
use crate::models::{Kind, KindFilter, NewTransaction, Transaction};
use crate::utils::date;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::str::FromStr;

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> rusqlite::Result<Transaction> {
    let kind_str: String = row.get("kind")?;
    let kind = Kind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(1, AppError::Validation(format!("Invalid kind: {}", kind_str))))?;

    let amount_str: String = row.get("amount")?;
    let amount = Decimal::from_str(&amount_str).map_err(|_| {
        conversion_error(3, AppError::Validation(format!("Invalid amount: {}", amount_str)))
    })?;

    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        conversion_error(4, AppError::Validation(format!("Invalid date: {}", date_str)))
    })?;

    Ok(Transaction {
        id: row.get("id")?,
        kind,
        category: row.get("category")?,
        amount,
        date,
        description: row.get("description")?,
    })
}

pub fn insert_transaction(conn: &Connection, tx: &NewTransaction) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO transactions (kind, category, amount, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            tx.kind.to_db_str(),
            tx.category,
            tx.amount.to_string(),
            date::to_db_str(&tx.date),
            tx.description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update every field except id. Returns the number of rows touched (0 or 1).
pub fn update_transaction(conn: &Connection, id: i64, tx: &NewTransaction) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE transactions
         SET kind = ?1, category = ?2, amount = ?3, date = ?4, description = ?5
         WHERE id = ?6",
        params![
            tx.kind.to_db_str(),
            tx.category,
            tx.amount.to_string(),
            date::to_db_str(&tx.date),
            tx.description,
            id,
        ],
    )?;
    Ok(n)
}

pub fn get_transaction(conn: &Connection, id: i64) -> AppResult<Option<Transaction>> {
    let tx = conn
        .prepare_cached("SELECT * FROM transactions WHERE id = ?1")?
        .query_row([id], map_row)
        .optional()?;
    Ok(tx)
}

/// Newest first; same-day rows keep their insertion order.
pub fn list_transactions(conn: &Connection, filter: KindFilter) -> AppResult<Vec<Transaction>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM transactions
         WHERE ?1 IS NULL OR kind = ?1
         ORDER BY date DESC, id ASC",
    )?;

    let kind = filter.kind().map(|k| k.to_db_str());
    let rows = stmt.query_map([kind], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_transaction(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM transactions WHERE id = ?1", [id])?;
    Ok(n)
}

/// Raw `(category, amount)` pairs of one kind, used by the aggregations.
pub fn load_amounts(conn: &Connection, kind: Kind) -> AppResult<Vec<(String, Decimal)>> {
    let mut stmt =
        conn.prepare_cached("SELECT category, amount FROM transactions WHERE kind = ?1")?;

    let rows = stmt.query_map([kind.to_db_str()], |row| {
        let category: String = row.get(0)?;
        let raw: String = row.get(1)?;
        let amount = Decimal::from_str(&raw)
            .map_err(|_| conversion_error(1, AppError::Validation(format!("Invalid amount: {}", raw))))?;
        Ok((category, amount))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
