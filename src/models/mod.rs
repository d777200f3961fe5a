pub mod category;
pub mod kind;
pub mod summary;
pub mod transaction;

pub use category::Category;
pub use kind::{Kind, KindFilter};
pub use summary::{CategoryTotal, Summary};
pub use transaction::{NewTransaction, Transaction};
