use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "feedbackdb.toml";

const ENV_NAME_DATA_DIR: &str = "FEEDBACK_DATA_DIR";

#[derive(Debug)]
pub struct Config {
    pub storage: Storage,
    pub seed: Seed,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(dir) = env::var(ENV_NAME_DATA_DIR) {
            cfg.override_data_dir(dir.into());
        }
        Ok(cfg)
    }

    /// Only affects storage backends that are backed by files.
    pub fn override_data_dir(&mut self, dir: PathBuf) {
        match &mut self.storage.backend {
            StorageBackend::JsonFile { dir: data_dir } => *data_dir = dir,
            StorageBackend::InMemory => {
                log::warn!(
                    "Ignoring data directory {} for in-memory storage",
                    dir.display()
                );
            }
        }
    }
}

#[derive(Debug)]
pub struct Storage {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    JsonFile {
        /// File system directory for the JSON persistence slots.
        dir: PathBuf,
    },
    /// Nothing survives the process
    InMemory,
}

#[derive(Debug)]
pub struct Seed {
    pub enabled: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { storage, seed } = from;

        let raw::Storage { backend, dir } = storage.unwrap_or_default();
        let backend = match backend {
            raw::StorageBackend::JsonFile => {
                let dir = dir.ok_or_else(|| anyhow!("Missing storage directory"))?;
                log::debug!("Use JSON file storage ({})", dir.display());
                StorageBackend::JsonFile { dir }
            }
            raw::StorageBackend::InMemory => {
                log::debug!("Use in-memory storage");
                StorageBackend::InMemory
            }
        };
        let storage = Storage { backend };

        let raw::Seed { enabled } = seed.unwrap_or_default();
        let seed = Seed { enabled };

        Ok(Self { storage, seed })
    }
}
