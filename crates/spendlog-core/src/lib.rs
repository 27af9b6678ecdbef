pub mod config;
pub mod error;
pub mod result;

pub use config::{AppConfig, PeriodScope};
pub use error::SpendlogError;
pub use result::SpendlogResult;
