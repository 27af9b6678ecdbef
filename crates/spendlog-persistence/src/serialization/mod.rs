use crate::traits::Serializer;
use spendlog_core::{SpendlogError, SpendlogResult};

/// JSON serializer for domain models
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> SpendlogResult<Vec<u8>> {
        serde_json::to_vec(data).map_err(|e| SpendlogError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> SpendlogResult<T> {
        serde_json::from_slice(bytes).map_err(|e| SpendlogError::Serialization(e.to_string()))
    }
}
