use crate::models::{Kind, KindFilter};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rfinanzas
/// CLI application to record income and expenses with SQLite
#[derive(Parser)]
#[command(
    name = "rfinanzas",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small personal finance CLI: record income and expenses by category and summarize them using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a command the summary is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Accepts `expense`/`income` as well as the short codes `e`/`i`.
fn parse_kind(s: &str) -> Result<Kind, String> {
    Kind::from_code(s).ok_or_else(|| format!("invalid kind '{s}' (use expense|e or income|i)"))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new transaction
    Add {
        #[arg(long, short, value_parser = parse_kind, help = "expense|e or income|i (default from config)")]
        kind: Option<Kind>,

        #[arg(
            long,
            short,
            help = "Category name (default: first category of the kind)"
        )]
        category: Option<String>,

        #[arg(long, short, allow_hyphen_values = true, help = "Positive amount, e.g. 25.50")]
        amount: String,

        #[arg(long, short, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "desc", help = "Optional description")]
        description: Option<String>,
    },

    /// Show the transaction history, newest first
    List {
        #[arg(long, short, value_enum, default_value_t = KindFilter::All)]
        kind: KindFilter,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Change an existing transaction
    Edit {
        id: i64,

        #[arg(long, short, value_parser = parse_kind)]
        kind: Option<Kind>,

        #[arg(long, short)]
        category: Option<String>,

        #[arg(long, short, allow_hyphen_values = true)]
        amount: Option<String>,

        #[arg(long, short)]
        date: Option<String>,

        #[arg(long = "desc", help = "New description (empty string clears it)")]
        description: Option<String>,
    },

    /// Delete one or more transactions by id
    Del {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Totals, balance and expense distribution by category
    Summary {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Export data (not available yet)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Import a database (not available yet)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories, expenses first
    List {
        #[arg(long, short, value_parser = parse_kind)]
        kind: Option<Kind>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Create a category
    Add {
        name: String,

        #[arg(long, short, value_parser = parse_kind, default_value = "expense")]
        kind: Kind,
    },

    /// Delete an unused category by id
    Del {
        id: i64,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Db,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Db => "db",
        }
    }
}
