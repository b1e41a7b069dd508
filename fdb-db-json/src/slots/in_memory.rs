use std::collections::HashMap;

use parking_lot::RwLock;

use super::*;

/// Volatile slots, e.g. for tests or a throwaway session.
#[derive(Debug, Default)]
pub struct InMemorySlots {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON content of a slot.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.slots.read().get(key).cloned()
    }

    /// Overwrites a slot with arbitrary content, bypassing serialization.
    pub fn put_raw(&self, key: &str, json: impl Into<String>) {
        self.slots.write().insert(key.to_owned(), json.into());
    }
}

impl Slots for InMemorySlots {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let slots = self.slots.read();
        let Some(json) = slots.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(json)
            .map(Some)
            .map_err(|err| RepoError::CorruptState(format!("{key}: {err}")))
    }

    fn save<T: Serialize + DeserializeOwned>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(anyhow::Error::from)?;
        self.slots.write().insert(key.to_owned(), json);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.write().remove(key);
        Ok(())
    }
}
