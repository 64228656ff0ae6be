//! Persistence for the prompt collection.

use super::Prompt;
use crate::error::{Result, WalletError};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads and saves the whole prompt collection.
///
/// The template engine never touches storage; commands receive a store
/// and pass prompt content to the engine.
pub trait PromptStore {
    /// Load every prompt. A store that has never been written is empty.
    fn load(&self) -> Result<Vec<Prompt>>;

    /// Replace the stored collection with `prompts`.
    fn save(&self, prompts: &[Prompt]) -> Result<()>;

    /// Remove the prompt with `id`. Returns false if no prompt had that id.
    fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut prompts = self.load()?;
        let before = prompts.len();
        prompts.retain(|p| p.id != id);
        if prompts.len() == before {
            return Ok(false);
        }
        self.save(&prompts)?;
        Ok(true)
    }
}

/// Stores the collection as a pretty-printed JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PromptStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Prompt>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "prompt file not found, starting empty");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            WalletError::StorageError(format!(
                "failed to read prompt file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let prompts: Vec<Prompt> = serde_json::from_str(&content).map_err(|e| {
            WalletError::StorageError(format!(
                "prompt file '{}' is not a valid prompt list: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(count = prompts.len(), "loaded prompts");
        Ok(prompts)
    }

    fn save(&self, prompts: &[Prompt]) -> Result<()> {
        let mut json = serde_json::to_string_pretty(prompts).map_err(|e| {
            WalletError::StorageError(format!("failed to serialize prompts: {}", e))
        })?;
        json.push('\n');

        atomic_write_file(&self.path, &json)?;
        debug!(count = prompts.len(), path = %self.path.display(), "saved prompts");
        Ok(())
    }
}
