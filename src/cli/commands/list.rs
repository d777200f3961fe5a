use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TransactionLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::Transaction;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_kind, colorize};
use crate::utils::format_money;
use crate::utils::table::{Column, Table};

pub(crate) fn transactions_table(txs: &[Transaction], cfg: &Config) -> Table {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Kind"),
        Column::left("Category"),
        Column::right("Amount"),
        Column::left("Description"),
    ]);

    for tx in txs {
        let color = color_for_kind(tx.kind);
        table.add_row(vec![
            tx.id.to_string(),
            tx.date_str(),
            colorize(tx.kind.label(), color),
            tx.category.clone(),
            colorize(&format_money(tx.amount, &cfg.currency_symbol), color),
            colorize(tx.description.as_deref().unwrap_or("--"), ""),
        ]);
    }

    table
}

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::List { kind, json } = cmd {
        let txs = TransactionLogic::list(store, *kind)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&txs)?);
            return Ok(());
        }

        if txs.is_empty() {
            info("No transactions recorded.");
            return Ok(());
        }

        header("Transaction history");
        print!("{}", transactions_table(&txs, cfg).render());
        println!("\n{} transaction(s)", txs.len());
    }

    Ok(())
}
