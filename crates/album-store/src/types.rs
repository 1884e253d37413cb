use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse album data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid album payload: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// One persisted album page record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedPage {
    pub order: usize,
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub caption: String,
    #[serde(rename = "rotationSteps", default)]
    pub rotation_steps: u8,
}
