#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfz() -> Command {
    cargo_bin_cmd!("rfinanzas")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfinanzas.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB in test mode (no config file is written)
pub fn init_db(db_path: &str) {
    rfz()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one transaction through the CLI
pub fn add_tx(db_path: &str, kind: &str, category: &str, amount: &str, date: &str) {
    rfz()
        .args([
            "--db", db_path, "add", "--kind", kind, "--category", category, "--amount", amount,
            "--date", date,
        ])
        .assert()
        .success();
}

/// Fresh DB with the reference data set:
/// expense Alimentos 25.50 on 2024-01-15, income Salario 1000 on 2024-01-01
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_tx(db_path, "expense", "Alimentos", "25.50", "2024-01-15");
    add_tx(db_path, "income", "Salario", "1000", "2024-01-01");
}
