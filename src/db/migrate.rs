//! Schema migrations.
//!
//! Each migration runs once; applied versions are recorded in the `log`
//! table as `migration_applied` rows, so the table doubles as the schema
//! history.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_create_categories",
        description: "Created categories table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS categories (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE,
            kind  TEXT NOT NULL CHECK(kind IN ('expense','income'))
        );
        "#,
    },
    Migration {
        version: "20240101_0002_create_transactions",
        description: "Created transactions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            kind         TEXT NOT NULL CHECK(kind IN ('expense','income')),
            category     TEXT NOT NULL,
            amount       TEXT NOT NULL,
            date         TEXT NOT NULL,
            description  TEXT
        );
        "#,
    },
    Migration {
        version: "20240312_0003_transaction_indexes",
        description: "Added date and kind/category indexes on transactions",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
        CREATE INDEX IF NOT EXISTS idx_transactions_kind_category ON transactions(kind, category);
        "#,
    },
];

/// Ensure that the `log` table exists. It must precede every migration.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;
    tx.commit()
}

/// Public entry point: run all pending migrations, in order.
///
/// Returns the versions applied by this call (empty when the schema was
/// already current).
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(format!("log table: {e}")))?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m).map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;
        applied.push(m.version);
    }

    Ok(applied)
}

