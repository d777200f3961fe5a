use crate::errors::{AppError, AppResult};
use crate::models::Kind;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_kind")]
    pub default_kind: Kind,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_kind() -> Kind {
    Kind::Expense
}
fn default_bar_width() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            currency_symbol: default_currency_symbol(),
            default_kind: default_kind(),
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.rfinanzas`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rfinanzas")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfinanzas.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rfinanzas.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve a user-supplied database name: absolute paths and `~/…` are
    /// taken as-is, bare names land in the config directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Write the configuration file (not in test mode) and return the
    /// database path it points to.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_db {
            Some(name) => Self::resolve_database(name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}
