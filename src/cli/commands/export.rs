use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};

/// `export` and `import` are placeholders: they always fail with
/// `NotImplemented` so scripts can tell them apart from real errors.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    match cmd {
        Commands::Export { format, file } => Err(AppError::NotImplemented(format!(
            "{} export to '{}'",
            format.as_str(),
            file
        ))),
        Commands::Import { file } => Err(AppError::NotImplemented(format!(
            "database import from '{}'",
            file
        ))),
        _ => Ok(()),
    }
}
