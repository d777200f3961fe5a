use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a money movement. Shared by transactions and categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Expense,
    Income,
}

impl Kind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Kind::Expense => "expense",
            Kind::Income => "income",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "expense" => Some(Kind::Expense),
            "income" => Some(Kind::Income),
            _ => None,
        }
    }

    /// Helper: convert user input (`e`, `expense`, `i`, `Income`, ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "e" | "expense" | "gasto" => Some(Kind::Expense),
            "i" | "income" | "ingreso" => Some(Kind::Income),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Kind::Expense => "Expense",
            Kind::Income => "Income",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// History filter: every transaction, or only one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KindFilter {
    #[default]
    All,
    Expense,
    Income,
}

impl KindFilter {
    pub fn kind(&self) -> Option<Kind> {
        match self {
            KindFilter::All => None,
            KindFilter::Expense => Some(Kind::Expense),
            KindFilter::Income => Some(Kind::Income),
        }
    }
}
