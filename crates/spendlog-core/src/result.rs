use crate::error::SpendlogError;

pub type SpendlogResult<T> = Result<T, SpendlogError>;
