use crate::cli::parser::Commands;
use crate::core::TransactionLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, store: &mut Store) -> AppResult<()> {
    if let Commands::Del { ids, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete the {} selected transaction(s)? This action is irreversible.",
                ids.len()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion (unknown ids are skipped)
        //
        let deleted = TransactionLogic::delete(store, ids)?;

        if deleted > 0 {
            success(format!("Deleted {} transaction(s).", deleted));
        } else {
            warning("No transaction was deleted.");
        }
    }

    Ok(())
}
