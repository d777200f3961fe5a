//! The local SQLite store: one file, one connection, explicit lifecycle.

use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct Store {
    pub conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;

        let conn = Connection::open(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Throwaway store, used by tests and previews.
    pub fn open_in_memory() -> AppResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            path: None,
        })
    }

    /// File backing this store, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }

    /// Close the connection, surfacing any error SQLite reports while doing so.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}
