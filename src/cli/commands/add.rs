use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{CategoryLogic, TransactionLogic};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::Kind;
use crate::ui::messages::{success, warning};
use crate::utils::{date, format_money};

/// The original form only offered categories of the selected kind, but the
/// field stayed editable; mismatches are reported, not rejected.
pub(crate) fn check_category(store: &Store, name: &str, kind: Kind) -> AppResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(());
    }

    match CategoryLogic::find(store, name)? {
        Some(cat) if cat.kind != kind => warning(format!(
            "Category '{}' is an {} category, recording it as {}.",
            cat.name,
            cat.kind.to_db_str(),
            kind.to_db_str()
        )),
        None => warning(format!("Category '{}' does not exist.", name)),
        _ => {}
    }
    Ok(())
}

/// Record a new transaction.
pub fn handle(cmd: &Commands, cfg: &Config, store: &mut Store) -> AppResult<()> {
    if let Commands::Add {
        kind,
        category,
        amount,
        date: date_arg,
        description,
    } = cmd
    {
        //
        // 1. Kind (default from config)
        //
        let kind = kind.unwrap_or(cfg.default_kind);

        //
        // 2. Category (default: first category of that kind)
        //
        let category = match category {
            Some(c) => c.clone(),
            None => CategoryLogic::list_names(store, kind)?
                .into_iter()
                .next()
                .unwrap_or_default(),
        };
        check_category(store, &category, kind)?;

        //
        // 3. Date (default today)
        //
        let date_str = date_arg
            .clone()
            .unwrap_or_else(|| date::to_db_str(&date::today()));

        //
        // 4. Validate + persist
        //
        let id = TransactionLogic::add(
            store,
            kind,
            &category,
            amount,
            &date_str,
            description.as_deref(),
        )?;

        let tx = TransactionLogic::get(store, id)?;
        success(format!(
            "Transaction #{} recorded: {} {} {} on {}",
            tx.id,
            tx.kind,
            tx.category,
            format_money(tx.amount, &cfg.currency_symbol),
            tx.date_str()
        ));
    }

    Ok(())
}
