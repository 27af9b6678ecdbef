pub mod expense_store;
pub mod serialization;
pub mod storage;
pub mod traits;

pub use expense_store::{ExpenseStore, STORAGE_KEY};
pub use serialization::JsonSerializer;
pub use storage::*;
pub use traits::*;
