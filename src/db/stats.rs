use crate::db::queries::load_amounts;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{CategoryTotal, Kind};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;

fn out_of_range(what: &str) -> AppError {
    AppError::Validation(format!("{what} is out of range"))
}

/// `a + b`, or an error when the result does not fit in a `Decimal`.
fn add_amounts(a: Decimal, b: Decimal, what: &str) -> AppResult<Decimal> {
    a.checked_add(b).ok_or_else(|| out_of_range(what))
}

/// Sum of all amounts of one kind; zero when there are none.
pub fn total_by_kind(conn: &Connection, kind: Kind) -> AppResult<Decimal> {
    let what = format!("{} total", kind.to_db_str());
    load_amounts(conn, kind)?
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, (_, amount)| add_amounts(acc, amount, &what))
}

/// Income total minus expense total.
pub fn balance(conn: &Connection) -> AppResult<Decimal> {
    let income = total_by_kind(conn, Kind::Income)?;
    let expense = total_by_kind(conn, Kind::Expense)?;
    income
        .checked_sub(expense)
        .ok_or_else(|| out_of_range("balance"))
}

/// Expense totals grouped by category name, largest first.
/// Equal totals are ordered by name so the output is stable.
pub fn expense_totals_by_category(conn: &Connection) -> AppResult<Vec<CategoryTotal>> {
    let mut grouped: BTreeMap<String, Decimal> = BTreeMap::new();
    for (category, amount) in load_amounts(conn, Kind::Expense)? {
        let total = grouped.entry(category).or_insert(Decimal::ZERO);
        *total = add_amounts(*total, amount, "category total")?;
    }

    let mut out: Vec<CategoryTotal> = grouped
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();

    // stable sort keeps the BTreeMap's name order among equal totals
    out.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(out)
}

pub fn print_db_info(store: &Store, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let tx_count: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
    let cat_count: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;

    println!("{}• Transactions:{} {}{}{}", CYAN, RESET, GREEN, tx_count, RESET);
    println!("{}• Categories:{} {}{}{}", CYAN, RESET, GREEN, cat_count, RESET);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = store
        .conn
        .query_row(
            "SELECT date FROM transactions ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = store
        .conn
        .query_row(
            "SELECT date FROM transactions ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) SCHEMA
    //
    let schema: Option<String> = store
        .conn
        .query_row(
            "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Schema:{} {}",
        CYAN,
        RESET,
        schema.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
