//! rfinanzas library root.
//! Exposes the data layer (store, operations, aggregations), the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::Store;
use db::initialize::init_db;
use errors::AppResult;

/// Central command dispatcher for commands that work on an open store
pub fn dispatch(cmd: &Commands, cfg: &Config, store: &mut Store) -> AppResult<()> {
    match cmd {
        Commands::Init | Commands::Config { .. } => Ok(()),
        Commands::Db { .. } => cli::commands::db::handle(cmd, cfg, store),
        Commands::Log { .. } => cli::commands::log::handle(cmd, store),
        Commands::Add { .. } => cli::commands::add::handle(cmd, cfg, store),
        Commands::List { .. } => cli::commands::list::handle(cmd, cfg, store),
        Commands::Edit { .. } => cli::commands::edit::handle(cmd, cfg, store),
        Commands::Del { .. } => cli::commands::del::handle(cmd, store),
        Commands::Category { .. } => cli::commands::category::handle(cmd, store),
        Commands::Summary { .. } => cli::commands::summary::handle(cmd, cfg, store),
        Commands::Export { .. } | Commands::Import { .. } => cli::commands::export::handle(cmd),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the --db override
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ no command → default view
    let default_view = Commands::Summary { json: false };
    let cmd = cli.command.as_ref().unwrap_or(&default_view);

    // 5️⃣ commands that do not need the store
    match cmd {
        Commands::Init => return cli::commands::init::handle(&cli),
        Commands::Config { .. } => return cli::commands::config::handle(cmd, &cfg),
        _ => {}
    }

    // 6️⃣ open + initialize the store, run the command, close the store
    //    (`db --migrate` migrates on its own so it can report what it applied)
    let mut store = Store::open(&cfg.database)?;
    if !matches!(cmd, Commands::Db { migrate: true, .. }) {
        init_db(&store)?;
    }

    let result = dispatch(cmd, &cfg, &mut store);
    let closed = store.close();
    result?;
    closed
}
