// Configuration loading (listing-desk.toml).

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::models::Money;
use crate::store::OPENING_BALANCE;

pub const CONFIG_FILE_NAME: &str = "listing-desk.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub ledger: LedgerConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `session.json` and `profile.json`. Falls back to the
    /// platform data directory.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Balance an agent starts with before the ledger is first written
    pub opening_balance: Money,
    pub currency: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            opening_balance: OPENING_BALANCE,
            currency: "JOD".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
    pub owner_name: String,
    /// Shown when a listing has no stored conversation yet
    pub greeting: String,
    pub auto_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            owner_name: "Owner".to_string(),
            greeting: "Hello! How can I help you?".to_string(),
            auto_reply: "Thanks for reaching out! We'll get back to you shortly 😊".to_string(),
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Load from an explicit path, or from the platform config directory when
    /// `path` is `None`. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.opening_balance.is_negative() {
            return Err(ConfigError::Validation {
                field: "ledger.opening_balance".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.ledger.currency.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "ledger.currency".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Resolved storage directory.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from(".listing-desk"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "listing-desk", "listing-desk")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
