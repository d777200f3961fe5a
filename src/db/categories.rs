//! SQL for the `categories` table.

use crate::errors::{AppError, AppResult};
use crate::models::{Category, Kind};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// True when `err` is a UNIQUE constraint failure.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

pub fn map_row(row: &Row) -> rusqlite::Result<Category> {
    let kind_str: String = row.get("kind")?;
    let kind = Kind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Validation(format!("Invalid kind: {}", kind_str))),
        )
    })?;

    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
        kind,
    })
}

/// Insert a category. A name collision is reported as `DuplicateName`.
pub fn insert_category(conn: &Connection, name: &str, kind: Kind) -> AppResult<i64> {
    match conn.execute(
        "INSERT INTO categories (name, kind) VALUES (?1, ?2)",
        params![name, kind.to_db_str()],
    ) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateName(name.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// All categories, expenses first, then by name.
pub fn list_categories(conn: &Connection) -> AppResult<Vec<Category>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, kind FROM categories ORDER BY kind, name")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Names of the categories of one kind, alphabetically.
pub fn list_category_names(conn: &Connection, kind: Kind) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT name FROM categories WHERE kind = ?1 ORDER BY name")?;
    let rows = stmt.query_map([kind.to_db_str()], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_category(conn: &Connection, id: i64) -> AppResult<Option<Category>> {
    let cat = conn
        .prepare_cached("SELECT id, name, kind FROM categories WHERE id = ?1")?
        .query_row([id], map_row)
        .optional()?;
    Ok(cat)
}

pub fn find_category_by_name(conn: &Connection, name: &str) -> AppResult<Option<Category>> {
    let cat = conn
        .prepare_cached("SELECT id, name, kind FROM categories WHERE name = ?1")?
        .query_row([name], map_row)
        .optional()?;
    Ok(cat)
}

/// Number of transactions whose category field equals the name of category `id`.
///
/// The link is by name: renaming a category outside this tool would
/// silently break the guard.
pub fn count_transactions_for_category(conn: &Connection, id: i64) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM transactions
         WHERE category = (SELECT name FROM categories WHERE id = ?1)",
        [id],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn delete_category(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM categories WHERE id = ?1", [id])?;
    Ok(n)
}
