use crate::cli::commands::add::check_category;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TransactionLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::NewTransaction;
use crate::ui::messages::success;
use crate::utils::format_money;

/// Update a transaction in place. Fields not given on the command line keep
/// their current value; the merged row goes through the same validation as `add`.
pub fn handle(cmd: &Commands, cfg: &Config, store: &mut Store) -> AppResult<()> {
    if let Commands::Edit {
        id,
        kind,
        category,
        amount,
        date,
        description,
    } = cmd
    {
        let current = TransactionLogic::get(store, *id)?;

        let kind = kind.unwrap_or(current.kind);
        let category = category.clone().unwrap_or_else(|| current.category.clone());
        let amount = amount.clone().unwrap_or_else(|| current.amount.to_string());
        let date = date.clone().unwrap_or_else(|| current.date_str());
        let description = description.clone().or_else(|| current.description.clone());

        if kind != current.kind || category != current.category {
            check_category(store, &category, kind)?;
        }

        let updated =
            NewTransaction::parse(kind, &category, &amount, &date, description.as_deref())?;
        TransactionLogic::update(store, *id, &updated)?;

        success(format!(
            "Transaction #{} updated: {} {} {} on {}",
            id,
            updated.kind,
            updated.category,
            format_money(updated.amount, &cfg.currency_symbol),
            updated.date_str()
        ));
    }

    Ok(())
}
