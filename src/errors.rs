//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Consistency rules
    // ---------------------------
    #[error("A category named '{0}' already exists")]
    DuplicateName(String),

    #[error("Category '{name}' is still used by {count} transaction(s)")]
    Referential { name: String, count: i64 },

    #[error("{0} not found")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Stubbed features
    // ---------------------------
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

pub type AppResult<T> = Result<T, AppError>;
