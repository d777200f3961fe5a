use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations and the default categories
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rfinanzas…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let store = Store::open(&db_path)?;
    let report = init_db(&store)?;

    for version in &report.migrations {
        info(format!("Migration applied: {}", version));
    }
    if report.seeded > 0 {
        info(format!("Seeded {} default categories", report.seeded));
    }

    log::audit(
        &store.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    store.close()?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
