use spendlog_core::SpendlogResult;

/// Durable string storage addressed by key.
///
/// Modelled on browser local storage: whole values are read and replaced,
/// never patched.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Read the value under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> SpendlogResult<Option<String>>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> SpendlogResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T> {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> SpendlogResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> SpendlogResult<T>;
}
