//! Audit log for the prompt wallet.
//!
//! Every change to the collection (and every successful copy) is appended
//! to `<data_dir>/events.ndjson` as one JSON object per line:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: create, import, update, delete, seed, copy
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `prompt`: optional prompt id
//! - `details`: freeform object with action-specific details
//!
//! The log is informational. Commands record events through
//! [`record_event`], which reports failures as warnings instead of failing
//! the command that has already changed the collection.

use crate::config::Config;
use crate::context::WalletContext;
use crate::error::{Result, WalletError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use tracing::warn;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Prompt created from the command line
    Create,
    /// Prompt created from a text file
    Import,
    /// Prompt edited in place
    Update,
    /// Prompt deleted
    Delete,
    /// Sample prompts written to an empty collection
    Seed,
    /// Rendered prompt copied to the clipboard
    Copy,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventAction::Create => "create",
            EventAction::Import => "import",
            EventAction::Update => "update",
            EventAction::Delete => "delete",
            EventAction::Seed => "seed",
            EventAction::Copy => "copy",
        };
        f.write_str(name)
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Id of the prompt the event concerns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<i64>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            prompt: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the prompt id for this event.
    pub fn with_prompt(mut self, id: i64) -> Self {
        self.prompt = Some(id);
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            WalletError::StorageError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the audit log, creating the file if needed.
pub fn append_event(ctx: &WalletContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();
    let json_line = event.to_ndjson_line()?;

    if !ctx.data_dir.exists() {
        fs::create_dir_all(&ctx.data_dir).map_err(|e| {
            WalletError::StorageError(format!(
                "failed to create data directory '{}': {}",
                ctx.data_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            WalletError::StorageError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        WalletError::StorageError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append an event if the audit log is enabled, warning on failure.
pub fn record_event(ctx: &WalletContext, config: &Config, event: Event) {
    if !config.audit_log {
        return;
    }

    if let Err(e) = append_event(ctx, &event) {
        warn!(action = %event.action, "failed to record audit event: {}", e);
    }
}

/// Read every event from the audit log.
///
/// A missing log yields an empty list. Lines that fail to parse are skipped.
pub fn read_events(ctx: &WalletContext) -> Result<Vec<Event>> {
    let events_file = ctx.events_file();
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let file = fs::File::open(&events_file).map_err(|e| {
        WalletError::StorageError(format!(
            "failed to open events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    let mut events = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| {
            WalletError::StorageError(format!("failed to read events file: {}", e))
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Event>(&line) {
            Ok(event) => events.push(event),
            Err(e) => warn!("skipping malformed audit log line: {}", e),
        }
    }

    Ok(events)
}
