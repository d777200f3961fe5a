use crate::db::categories::{
    count_transactions_for_category, delete_category, find_category_by_name, get_category,
    insert_category, list_categories, list_category_names,
};
use crate::db::log::audit;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Kind};

/// Business logic for category management.
pub struct CategoryLogic;

impl CategoryLogic {
    /// Create a category. The name is trimmed; it must be non-empty and unique.
    pub fn add(store: &mut Store, name: &str, kind: Kind) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("a category name is required".into()));
        }

        let id = insert_category(&store.conn, name, kind)?;
        audit(
            &store.conn,
            "category_add",
            name,
            &format!("Added {} category #{id}", kind.to_db_str()),
        );
        Ok(id)
    }

    /// Ordered by kind (expenses first), then name.
    pub fn list(store: &Store) -> AppResult<Vec<Category>> {
        list_categories(&store.conn)
    }

    pub fn list_names(store: &Store, kind: Kind) -> AppResult<Vec<String>> {
        list_category_names(&store.conn, kind)
    }

    pub fn find(store: &Store, name: &str) -> AppResult<Option<Category>> {
        find_category_by_name(&store.conn, name)
    }

    pub fn get(store: &Store, id: i64) -> AppResult<Category> {
        get_category(&store.conn, id)?.ok_or_else(|| AppError::NotFound(format!("Category #{id}")))
    }

    /// Fails with `NotFound` or `Referential` when category `id` cannot be removed.
    pub fn ensure_deletable(store: &Store, id: i64) -> AppResult<Category> {
        let category = Self::get(store, id)?;

        let count = count_transactions_for_category(&store.conn, id)?;
        if count > 0 {
            return Err(AppError::Referential {
                name: category.name,
                count,
            });
        }

        Ok(category)
    }

    /// Remove a category nobody uses. Returns the removed row.
    pub fn delete(store: &mut Store, id: i64) -> AppResult<Category> {
        let category = Self::ensure_deletable(store, id)?;

        delete_category(&store.conn, id)?;
        audit(
            &store.conn,
            "category_del",
            &category.name,
            &format!("Deleted {} category #{id}", category.kind.to_db_str()),
        );
        Ok(category)
    }
}
