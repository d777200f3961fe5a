use crate::db::log::audit;
use crate::db::queries::{
    delete_transaction, get_transaction, insert_transaction, list_transactions, update_transaction,
};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{Kind, KindFilter, NewTransaction, Transaction};
use std::collections::BTreeSet;

/// Business logic for recording, listing, editing and deleting transactions.
pub struct TransactionLogic;

fn describe(tx: &NewTransaction) -> String {
    format!(
        "{} {} {} on {}",
        tx.kind.to_db_str(),
        tx.category,
        tx.amount,
        tx.date_str()
    )
}

impl TransactionLogic {
    /// Validate raw input and record a new transaction. Returns its id.
    pub fn add(
        store: &mut Store,
        kind: Kind,
        category: &str,
        amount: &str,
        date: &str,
        description: Option<&str>,
    ) -> AppResult<i64> {
        let new_tx = NewTransaction::parse(kind, category, amount, date, description)?;
        Self::insert(store, &new_tx)
    }

    /// Record an already validated transaction.
    pub fn insert(store: &mut Store, tx: &NewTransaction) -> AppResult<i64> {
        let id = insert_transaction(&store.conn, tx)?;
        audit(&store.conn, "add", &format!("#{id}"), &describe(tx));
        Ok(id)
    }

    pub fn list(store: &Store, filter: KindFilter) -> AppResult<Vec<Transaction>> {
        list_transactions(&store.conn, filter)
    }

    pub fn get(store: &Store, id: i64) -> AppResult<Transaction> {
        get_transaction(&store.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("Transaction #{id}")))
    }

    /// Replace every field of transaction `id`.
    pub fn update(store: &mut Store, id: i64, tx: &NewTransaction) -> AppResult<()> {
        if update_transaction(&store.conn, id, tx)? == 0 {
            return Err(AppError::NotFound(format!("Transaction #{id}")));
        }
        audit(&store.conn, "edit", &format!("#{id}"), &describe(tx));
        Ok(())
    }

    /// Delete every id that exists and return how many rows went away.
    /// Unknown ids are skipped; duplicates count once.
    pub fn delete(store: &mut Store, ids: &[i64]) -> AppResult<usize> {
        let unique: BTreeSet<i64> = ids.iter().copied().collect();

        let removed = store.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut removed = Vec::new();
            for id in unique {
                if delete_transaction(&tx, id)? > 0 {
                    removed.push(id);
                }
            }
            tx.commit()?;
            Ok(removed)
        })?;

        if !removed.is_empty() {
            let ids_str: Vec<String> = removed.iter().map(|id| format!("#{id}")).collect();
            audit(
                &store.conn,
                "del",
                &ids_str.join(","),
                &format!("Deleted {} transaction(s)", removed.len()),
            );
        }

        Ok(removed.len())
    }
}
