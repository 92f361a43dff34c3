//! Profile dataset collaborator.
//!
//! The engine only consumes a list of `Profile` records; where they come from
//! is behind the `ProfileSource` trait, carried in `AppState` as
//! `Arc<dyn ProfileSource>`. Default backend: `JsonFileSource`, a JSON array
//! on disk.

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::models::profile::Profile;

/// Supplies the candidate profiles to rank. Implement this to swap the
/// dataset backend without touching handlers or the engine.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Returns every profile in the dataset. An empty dataset is a valid
    /// result; any load or parse failure is `AppError::Dataset`.
    async fn load(&self) -> Result<Vec<Profile>, AppError>;
}

/// Reads profiles from a JSON file containing a top-level array.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfileSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Profile>, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::Dataset(format!("cannot read {}: {e}", self.path.display()))
        })?;

        let value: Value = serde_json::from_str(&raw).map_err(|e| {
            AppError::Dataset(format!("invalid JSON in {}: {e}", self.path.display()))
        })?;

        if !value.is_array() {
            return Err(AppError::Dataset(format!(
                "{} must contain a top-level JSON array",
                self.path.display()
            )));
        }

        serde_json::from_value(value).map_err(|e| {
            AppError::Dataset(format!(
                "malformed profile record in {}: {e}",
                self.path.display()
            ))
        })
    }
}
