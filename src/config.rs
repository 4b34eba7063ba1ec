//! Configuration loading
//!
//! Settings are layered, lowest precedence first: built-in defaults, a
//! TOML file (the platform config directory, or an explicit `--config`
//! path), then `SUPPORT_CENTER_*` environment variables using `__` between
//! nested keys, e.g. `SUPPORT_CENTER_STORAGE__PATH=/tmp/tickets.json`.

use crate::error::Result;
use crate::storage::{InMemoryStorage, JsonFileStorage, TicketRepository};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "SUPPORT_CENTER";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub log: LogConfig,
}

/// Which repository implementation backs the manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Ticket file, used by the file backend
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_data_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default `tracing` filter directive
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `config_file` must exist; the default one is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(::config::File::from(path).required(true));
            },
            None => {
                if let Some(path) = Self::default_config_file() {
                    builder = builder.add_source(::config::File::from(path).required(false));
                }
            },
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Platform location of the config file
    pub fn default_config_file() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Open the configured repository
    pub fn open_storage(&self) -> Box<dyn TicketRepository> {
        match self.storage.backend {
            StorageBackend::File => {
                tracing::debug!(path = %self.storage.path.display(), "Using file storage");
                Box::new(JsonFileStorage::new(&self.storage.path))
            },
            StorageBackend::Memory => {
                tracing::debug!("Using in-memory storage");
                Box::new(InMemoryStorage::new())
            },
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "support-center")
}

/// Platform data directory, falling back to a directory under the working directory
fn default_data_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(".support-center").join("tickets.json"),
        |dirs| dirs.data_dir().join("tickets.json"),
    )
}
