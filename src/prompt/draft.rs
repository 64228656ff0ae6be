//! Create and edit flows for prompts.

use super::Prompt;
use crate::config::Config;
use crate::error::{Result, WalletError};
use std::collections::BTreeMap;

/// Fields supplied when creating a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title: String,
    pub category: String,
    pub content: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl PromptDraft {
    /// Check the draft against the configured field limits.
    pub fn validate(&self, config: &Config) -> Result<()> {
        validate_fields(&self.title, &self.content, &self.description, config)
    }

    /// Turn a validated draft into a record with the given id and date.
    pub fn into_prompt(self, id: i64, date: String, config: &Config) -> Prompt {
        let mut prompt = Prompt {
            id,
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            content: self.content,
            description: self.description.trim().to_string(),
            tags: normalize_tags(self.tags),
            date,
            preview: String::new(),
            tag: String::new(),
            extra: BTreeMap::new(),
        };
        prompt.refresh_derived(config.preview_length, &config.default_category);
        prompt
    }
}

/// Field changes for an existing prompt. `None` leaves a field unchanged.
///
/// `id` and `date` are not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptEdit {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PromptEdit {
    /// Returns true if the edit changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.content.is_none()
            && self.description.is_none()
            && self.tags.is_none()
    }

    /// Names of the fields this edit touches, for logging.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.category.is_some() {
            fields.push("category");
        }
        if self.content.is_some() {
            fields.push("content");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.tags.is_some() {
            fields.push("tags");
        }
        fields
    }
}

impl Prompt {
    /// Apply an edit in place, validating the result first.
    ///
    /// On error the prompt is left untouched. `preview` and `tag` are
    /// re-derived on success.
    pub fn apply_edit(&mut self, edit: PromptEdit, config: &Config) -> Result<()> {
        let title = edit
            .title
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| self.title.clone());
        let content = edit.content.unwrap_or_else(|| self.content.clone());
        let description = edit
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| self.description.clone());

        validate_fields(&title, &content, &description, config)?;

        self.title = title;
        self.content = content;
        self.description = description;
        if let Some(category) = edit.category {
            self.category = category.trim().to_string();
        }
        if let Some(tags) = edit.tags {
            self.tags = normalize_tags(tags);
        }
        self.refresh_derived(config.preview_length, &config.default_category);
        Ok(())
    }
}

/// Trim tags and drop blank entries, keeping order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn validate_fields(title: &str, content: &str, description: &str, config: &Config) -> Result<()> {
    if title.trim().is_empty() {
        return Err(WalletError::UserError("title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Err(WalletError::UserError("content is required".to_string()));
    }

    check_length("title", title, config.max_title_len)?;
    check_length("content", content, config.max_content_len)?;
    check_length("description", description, config.max_description_len)?;
    Ok(())
}

fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(WalletError::UserError(format!(
            "{} is too long: {} characters (maximum {})",
            field, len, max
        )));
    }
    Ok(())
}
