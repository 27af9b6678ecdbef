pub mod expense;
pub mod export;
pub mod summary;
