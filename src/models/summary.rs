use rust_decimal::Decimal;
use serde::Serialize;

/// Total spent in one expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Everything the summary view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub expenses_by_category: Vec<CategoryTotal>,
}
