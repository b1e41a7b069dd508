use std::{
    io::{self, ErrorKind},
    path::Path,
};

use jfs::Store;

use super::*;

/// One `<key>.json` file per slot inside a data directory.
pub struct JsonFileSlots {
    json_store: Store,
}

impl JsonFileSlots {
    /// Creates the directory if it does not exist yet.
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
}

fn from_io_err(key: &str, err: io::Error) -> RepoError {
    let malformed = err.kind() == ErrorKind::InvalidData
        || err
            .get_ref()
            .is_some_and(|inner| inner.is::<serde_json::Error>());
    if malformed {
        RepoError::CorruptState(format!("{key}: {err}"))
    } else {
        RepoError::Io(err)
    }
}

impl Slots for JsonFileSlots {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.json_store.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(from_io_err(key, err)),
        }
    }

    fn save<T: Serialize + DeserializeOwned>(&self, key: &str, value: &T) -> Result<()> {
        self.json_store
            .save_with_id(value, key)
            .map(|_| ())
            .map_err(|err| from_io_err(key, err))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self.json_store.delete(key) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(from_io_err(key, err)),
            _ => Ok(()),
        }
    }
}
