pub mod add;
pub mod category;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;
