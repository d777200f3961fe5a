use crate::db::categories::insert_category;
use crate::db::migrate::run_pending_migrations;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::category::DEFAULT_CATEGORIES;

/// What a call to [`init_db`] changed.
#[derive(Debug, Default)]
pub struct InitReport {
    pub migrations: Vec<&'static str>,
    pub seeded: usize,
}

/// Initialize the store. Safe to call on every startup.
///
/// Runs pending migrations, then inserts the default categories; names
/// that already exist are left alone.
pub fn init_db(store: &Store) -> AppResult<InitReport> {
    let migrations = run_pending_migrations(&store.conn)?;
    let seeded = seed_default_categories(store)?;
    Ok(InitReport { migrations, seeded })
}

fn seed_default_categories(store: &Store) -> AppResult<usize> {
    let mut inserted = 0;

    for (name, kind) in DEFAULT_CATEGORIES {
        match insert_category(&store.conn, name, kind) {
            Ok(_) => inserted += 1,
            Err(AppError::DuplicateName(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}
