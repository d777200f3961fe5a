use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SummaryLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::CategoryTotal;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BOLD, GREEN, RED, RESET, color_for_balance};
use crate::utils::format_money;
use crate::utils::table::{Column, Table};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Bar length proportional to the largest category total.
fn bar_len(total: Decimal, max: Decimal, width: usize) -> usize {
    if max.is_zero() {
        return 0;
    }
    (total / max * Decimal::from(width))
        .trunc()
        .to_usize()
        .unwrap_or(0)
}

fn distribution_table(rows: &[CategoryTotal], cfg: &Config) -> Table {
    let max = rows.iter().map(|r| r.total).max().unwrap_or(Decimal::ZERO);

    let mut table = Table::new(vec![
        Column::left("Category"),
        Column::left(""),
        Column::right("Total"),
    ]);
    for row in rows {
        let bar = "█".repeat(bar_len(row.total, max, cfg.bar_width));
        table.add_row(vec![
            row.category.clone(),
            format!("{RED}{bar}{RESET}"),
            format_money(row.total, &cfg.currency_symbol),
        ]);
    }
    table
}

/// The default view: totals, balance and where the money went.
pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    let json = matches!(cmd, Commands::Summary { json: true });
    let summary = SummaryLogic::summary(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let sym = &cfg.currency_symbol;

    header("Financial summary");
    println!(
        "Total income:   {GREEN}{}{RESET}",
        format_money(summary.total_income, sym)
    );
    println!(
        "Total expenses: {RED}{}{RESET}",
        format_money(summary.total_expense, sym)
    );
    println!(
        "Balance:        {BOLD}{}{}{RESET}",
        color_for_balance(summary.balance),
        format_money(summary.balance, sym)
    );
    println!();

    if summary.expenses_by_category.is_empty() {
        info("No expenses recorded yet.");
        return Ok(());
    }

    println!("{BOLD}Expense distribution by category{RESET}\n");
    print!(
        "{}",
        distribution_table(&summary.expenses_by_category, cfg).render()
    );

    Ok(())
}
