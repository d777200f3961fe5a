use crate::db::stats;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::{CategoryTotal, Kind, Summary};
use rust_decimal::Decimal;

/// Aggregations behind the summary view.
pub struct SummaryLogic;

impl SummaryLogic {
    pub fn total_by_kind(store: &Store, kind: Kind) -> AppResult<Decimal> {
        stats::total_by_kind(&store.conn, kind)
    }

    pub fn balance(store: &Store) -> AppResult<Decimal> {
        stats::balance(&store.conn)
    }

    pub fn expense_totals_by_category(store: &Store) -> AppResult<Vec<CategoryTotal>> {
        stats::expense_totals_by_category(&store.conn)
    }

    pub fn summary(store: &Store) -> AppResult<Summary> {
        let total_income = Self::total_by_kind(store, Kind::Income)?;
        let total_expense = Self::total_by_kind(store, Kind::Expense)?;

        Ok(Summary {
            total_income,
            total_expense,
            balance: Self::balance(store)?,
            expenses_by_category: Self::expense_totals_by_category(store)?,
        })
    }
}
