use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            LogLogic::print_log(store)?;
        } else {
            info("Nothing to do. Use `log --print` to show the internal log.");
        }
    }

    Ok(())
}
