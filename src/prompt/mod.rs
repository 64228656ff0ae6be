//! Prompt record model for the wallet.
//!
//! This module provides the persisted [`Prompt`] record plus:
//!
//! - Draft/edit flows with field validation (`draft`)
//! - Lookup, filtering and id assignment over a collection (`query`)
//! - The persistence collaborator and its JSON implementation (`store`)
//!
//! # Record Format
//!
//! The collection is a JSON array of records:
//!
//! ```text
//! {
//!   "id": 1760781600000,
//!   "title": "Cover letter",
//!   "category": "writing",
//!   "content": "Write a cover letter for {{job_title}} at {{company}}.",
//!   "description": "",
//!   "tags": ["job", "letter"],
//!   "date": "Oct 18, 2026",
//!   "preview": "Write a cover letter for {{job_title}} at {{company}}.",
//!   "tag": "writing"
//! }
//! ```
//!
//! `preview` and `tag` are derived from the other fields and refreshed on
//! every create and edit. Unknown fields are preserved.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

mod draft;
mod query;
mod store;
#[cfg(test)]
mod tests;

pub use draft::{PromptDraft, PromptEdit, normalize_tags};
pub use query::{PromptFilter, filter_prompts, find_prompt, next_id};
pub use store::{JsonFileStore, PromptStore};

/// Display format of the creation date, e.g. `Oct 18, 2026`.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// A persisted prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique id, the creation time in milliseconds since the epoch.
    pub id: i64,

    #[serde(default)]
    pub title: String,

    /// User-chosen category; may be empty.
    #[serde(default)]
    pub category: String,

    /// Template body; the only source of placeholders.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation date in [`DATE_FORMAT`]. Never changes after creation.
    #[serde(default)]
    pub date: String,

    /// Derived: description, or a truncated prefix of the content.
    #[serde(default)]
    pub preview: String,

    /// Derived: category, or the configured default category.
    #[serde(default)]
    pub tag: String,

    /// Unknown fields, kept for round-trip compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Prompt {
    /// Recompute `preview` and `tag` from the other fields.
    pub fn refresh_derived(&mut self, preview_length: usize, default_category: &str) {
        self.preview = derive_preview(&self.content, &self.description, preview_length);
        self.tag = derive_tag(&self.category, default_category);
    }

    /// Category to display: `tag` when set, else `category`.
    ///
    /// Records written by older versions may carry only one of the two.
    pub fn display_category(&self) -> &str {
        if !self.tag.is_empty() {
            &self.tag
        } else {
            &self.category
        }
    }
}

/// Build the preview text for a prompt.
///
/// A non-blank description is used as-is. Otherwise the first
/// `preview_length` characters of the content are used, followed by `...`
/// when the content was cut.
pub fn derive_preview(content: &str, description: &str, preview_length: usize) -> String {
    if !description.trim().is_empty() {
        return description.to_string();
    }

    let mut chars = content.chars();
    let prefix: String = chars.by_ref().take(preview_length).collect();
    if chars.next().is_some() {
        format!("{}...", prefix)
    } else {
        prefix
    }
}

/// The category, or `default_category` when the category is blank.
pub fn derive_tag(category: &str, default_category: &str) -> String {
    let category = category.trim();
    if category.is_empty() {
        default_category.to_string()
    } else {
        category.to_string()
    }
}

/// Format a creation timestamp as a display date.
pub fn format_date<Tz: TimeZone>(when: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    when.format(DATE_FORMAT).to_string()
}
