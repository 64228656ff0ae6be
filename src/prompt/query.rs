//! Lookup and filtering over a prompt collection.

use super::Prompt;
use crate::error::{Result, WalletError};

/// Criteria for listing prompts. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
    /// Case-insensitive exact match on the displayed category.
    pub category: Option<String>,
}

impl PromptFilter {
    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }

    /// Returns true if `prompt` satisfies every criterion.
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(search) = &self.search
            && !prompt
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }

        if let Some(category) = &self.category
            && prompt.display_category().to_lowercase() != category.trim().to_lowercase()
        {
            return false;
        }

        true
    }
}

/// The prompts matching `filter`, in collection order.
pub fn filter_prompts<'a>(prompts: &'a [Prompt], filter: &PromptFilter) -> Vec<&'a Prompt> {
    prompts.iter().filter(|p| filter.matches(p)).collect()
}

/// Find a prompt by id.
pub fn find_prompt(prompts: &[Prompt], id: i64) -> Option<&Prompt> {
    prompts.iter().find(|p| p.id == id)
}

/// Pick the id for a new prompt created at `now_millis`.
///
/// Ids follow the creation timestamp but are bumped past the current
/// maximum so two prompts created in the same millisecond (or after a
/// clock step backwards) never collide. Fails if the largest stored id
/// leaves no room above it.
pub fn next_id(prompts: &[Prompt], now_millis: i64) -> Result<i64> {
    match prompts.iter().map(|p| p.id).max() {
        Some(max) if max >= now_millis => max.checked_add(1).ok_or_else(|| {
            WalletError::StorageError(format!(
                "cannot allocate a new prompt id: stored id {} is the largest possible",
                max
            ))
        }),
        _ => Ok(now_millis),
    }
}
