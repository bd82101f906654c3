use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Money, Role};

/// Failures reading or writing persisted state
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("store file {path} is not a JSON object: {source}")]
    CorruptFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("malformed value under key `{key}`: {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },

    #[error("invalid amount `{value}` under key `{key}`")]
    InvalidAmount { key: String, value: String },
}

/// Errors surfaced by the dashboard workflows
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Money, available: Money },

    #[error("fee must not be negative, got {fee}")]
    InvalidFee { fee: Money },

    #[error("approvals are only available to agents (signed in as {role})")]
    NotAgent { role: Role },

    #[error("email and password are required")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DeskResult<T> = Result<T, DeskError>;
