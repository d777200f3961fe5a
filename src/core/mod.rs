pub mod category;
pub mod log;
pub mod summary;
pub mod transaction;

pub use category::CategoryLogic;
pub use log::LogLogic;
pub use summary::SummaryLogic;
pub use transaction::TransactionLogic;
