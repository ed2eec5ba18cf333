use std::collections::HashMap;

use crate::error::StoreError;

use super::Store;

/// Process-local store; nothing survives the run
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    values: HashMap<String, String>,
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
