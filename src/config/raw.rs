use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("feedbackdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub storage: Option<Storage>,
    pub seed: Option<Seed>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub backend: StorageBackend,
    pub dir: Option<PathBuf>,
}

impl Default for Storage {
    fn default() -> Self {
        Config::default().storage.expect("Storage configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    JsonFile,
    InMemory,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Seed {
    pub enabled: bool,
}

impl Default for Seed {
    fn default() -> Self {
        Config::default().seed.expect("Seed configuration")
    }
}
