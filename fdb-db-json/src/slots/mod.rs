//! Key-value persistence slots holding serialized JSON blobs.

use fdb_core::repositories::Error as RepoError;
use serde::{de::DeserializeOwned, Serialize};

mod in_memory;
mod json_file;

pub use self::{in_memory::InMemorySlots, json_file::JsonFileSlots};

pub type Result<T> = std::result::Result<T, RepoError>;

pub trait Slots {
    /// Returns `None` if the slot has never been written.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;

    fn save<T: Serialize + DeserializeOwned>(&self, key: &str, value: &T) -> Result<()>;

    /// Removing an empty slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
