use crate::cli::parser::{CategoryCommands, Commands};
use crate::core::CategoryLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{color_for_kind, colorize};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, store: &mut Store) -> AppResult<()> {
    let Commands::Category { action } = cmd else {
        return Ok(());
    };

    match action {
        CategoryCommands::List { kind, json } => {
            let mut categories = CategoryLogic::list(store)?;
            if let Some(k) = kind {
                categories.retain(|c| c.kind == *k);
            }

            if *json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
                return Ok(());
            }

            if categories.is_empty() {
                info("No categories defined.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::left("Kind"),
            ]);
            for c in &categories {
                table.add_row(vec![
                    c.id.to_string(),
                    c.name.clone(),
                    colorize(c.kind.label(), color_for_kind(c.kind)),
                ]);
            }

            header("Categories");
            print!("{}", table.render());
        }

        CategoryCommands::Add { name, kind } => {
            let id = CategoryLogic::add(store, name, *kind)?;
            success(format!(
                "Category '{}' ({}) added with id #{}.",
                name.trim(),
                kind.to_db_str(),
                id
            ));
        }

        CategoryCommands::Del { id, yes } => {
            // references are checked before asking anything
            let category = CategoryLogic::ensure_deletable(store, *id)?;

            if !*yes {
                let prompt = format!("Delete category '{}'?", category.name);
                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }

            let removed = CategoryLogic::delete(store, *id)?;
            success(format!("Category '{}' deleted.", removed.name));
        }
    }

    Ok(())
}
