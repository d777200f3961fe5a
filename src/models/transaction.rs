use super::kind::Kind;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, money};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A recorded money movement, as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: i64,                     // ⇔ transactions.id
    pub kind: Kind,                  // ⇔ transactions.kind ('expense' | 'income')
    pub category: String,            // ⇔ transactions.category (category *name*)
    pub amount: Decimal,             // ⇔ transactions.amount (TEXT, always > 0)
    pub date: NaiveDate,             // ⇔ transactions.date (TEXT "YYYY-MM-DD")
    pub description: Option<String>, // ⇔ transactions.description (NULL when blank)
}

impl Transaction {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A validated transaction that has not been persisted yet.
///
/// Built through [`NewTransaction::parse`], which applies every input rule,
/// so a value of this type is always safe to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: Kind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl NewTransaction {
    /// Validate raw user input.
    ///
    /// - `category` must not be blank (it is trimmed)
    /// - `amount` must be a decimal number strictly greater than zero
    /// - `date` must be an ISO calendar date (`YYYY-MM-DD`)
    /// - a blank `description` is treated as absent
    pub fn parse(
        kind: Kind,
        category: &str,
        amount: &str,
        date: &str,
        description: Option<&str>,
    ) -> AppResult<Self> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::Validation("a category is required".into()));
        }

        let amount = money::parse_amount(amount)?;

        let date = date::parse_date(date.trim()).ok_or_else(|| {
            AppError::Validation(format!("'{}' is not a valid date (YYYY-MM-DD)", date))
        })?;

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Self {
            kind,
            category: category.to_string(),
            amount,
            date,
            description,
        })
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
