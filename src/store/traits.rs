use crate::error::StoreError;

/// String key/value storage for one scope (session or profile)
///
/// Backends only move raw strings; typed encoding lives in `DeskStore`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
