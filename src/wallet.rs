//! Prompt collection operations used by the commands.
//!
//! [`Wallet`] owns an injected [`PromptStore`] and the loaded config, and
//! implements the create, edit, delete and seed flows. Each operation
//! loads the collection, changes it, and saves it back as a whole.

use crate::config::Config;
use crate::error::{Result, WalletError};
use crate::prompt::{
    Prompt, PromptDraft, PromptEdit, PromptFilter, PromptStore, filter_prompts, find_prompt,
    format_date, next_id,
};
use crate::samples::sample_drafts;
use chrono::{DateTime, Local};
use tracing::info;

/// The prompt collection plus the settings that govern it.
pub struct Wallet<S: PromptStore> {
    store: S,
    config: Config,
}

impl<S: PromptStore> Wallet<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every prompt, in stored order (newest first).
    #[cfg(test)]
    pub fn list(&self) -> Result<Vec<Prompt>> {
        self.store.load()
    }

    /// The prompts matching `filter`, in stored order.
    pub fn search(&self, filter: &PromptFilter) -> Result<Vec<Prompt>> {
        let prompts = self.store.load()?;
        Ok(filter_prompts(&prompts, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Look up one prompt.
    pub fn get(&self, id: i64) -> Result<Prompt> {
        let prompts = self.store.load()?;
        find_prompt(&prompts, id)
            .cloned()
            .ok_or(WalletError::NotFound(id))
    }

    /// Create a prompt from `draft` at time `now` and put it first in the list.
    pub fn create(&self, draft: PromptDraft, now: DateTime<Local>) -> Result<Prompt> {
        draft.validate(&self.config)?;

        let mut prompts = self.store.load()?;
        let id = next_id(&prompts, now.timestamp_millis())?;
        let prompt = draft.into_prompt(id, format_date(&now), &self.config);

        prompts.insert(0, prompt.clone());
        self.store.save(&prompts)?;

        info!(id = prompt.id, title = %prompt.title, "created prompt");
        Ok(prompt)
    }

    /// Apply `edit` to the prompt with `id`.
    pub fn update(&self, id: i64, edit: PromptEdit) -> Result<Prompt> {
        if edit.is_empty() {
            return Err(WalletError::UserError(
                "nothing to change: pass at least one field to edit".to_string(),
            ));
        }

        let mut prompts = self.store.load()?;
        let prompt = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(WalletError::NotFound(id))?;

        prompt.apply_edit(edit, &self.config)?;
        let updated = prompt.clone();
        self.store.save(&prompts)?;

        info!(id, "updated prompt");
        Ok(updated)
    }

    /// Delete the prompt with `id`, returning the removed record.
    pub fn delete(&self, id: i64) -> Result<Prompt> {
        let removed = self.get(id)?;
        if !self.store.delete_by_id(id)? {
            return Err(WalletError::NotFound(id));
        }

        info!(id, "deleted prompt");
        Ok(removed)
    }

    /// Write the sample prompts if the collection is empty and seeding is on.
    ///
    /// Returns the seeded prompts (empty when nothing was written).
    pub fn seed_if_empty(&self, now: DateTime<Local>) -> Result<Vec<Prompt>> {
        if !self.config.seed_samples || !self.store.load()?.is_empty() {
            return Ok(Vec::new());
        }

        let date = format_date(&now);
        let base = now.timestamp_millis();
        let mut seeded = Vec::new();
        for (offset, draft) in sample_drafts().into_iter().enumerate() {
            seeded.push(draft.into_prompt(base + offset as i64, date.clone(), &self.config));
        }

        self.store.save(&seeded)?;
        info!(count = seeded.len(), "seeded sample prompts");
        Ok(seeded)
    }
}
