//! Tests for the prompt model, drafts, queries and the JSON store.

use super::*;
use crate::config::Config;
use crate::error::WalletError;
use chrono::{Local, TimeZone};
use tempfile::TempDir;

const LEGACY_FILE: &str = r#"[
  {
    "id": 1729252800000,
    "title": "API documentation generator",
    "content": "Document the {{api_name}} API.",
    "tags": [],
    "date": "Oct 18, 2024",
    "preview": "Document the {{api_name}} API....",
    "tag": "documentation",
    "favorite": true
  }
]"#;

fn sample(id: i64, title: &str) -> Prompt {
    PromptDraft {
        title: title.to_string(),
        content: format!("Content of {}", title),
        ..PromptDraft::default()
    }
    .into_prompt(id, "Oct 18, 2026".to_string(), &Config::default())
}

// ============================================================================
// Derived fields
// ============================================================================

#[test]
fn test_preview_prefers_description() {
    assert_eq!(derive_preview("content", "A description", 80), "A description");
}

#[test]
fn test_preview_truncates_long_content() {
    let content = "x".repeat(100);
    let preview = derive_preview(&content, "", 80);
    assert_eq!(preview, format!("{}...", "x".repeat(80)));
}

#[test]
fn test_preview_keeps_short_content_whole() {
    assert_eq!(derive_preview("short", "   ", 80), "short");
}

#[test]
fn test_preview_counts_characters_not_bytes() {
    let preview = derive_preview("ééééé", "", 3);
    assert_eq!(preview, "ééé...");
}

#[test]
fn test_tag_defaults_when_category_blank() {
    assert_eq!(derive_tag("", "Other"), "Other");
    assert_eq!(derive_tag("   ", "Other"), "Other");
    assert_eq!(derive_tag(" writing ", "Other"), "writing");
}

#[test]
fn test_format_date() {
    let when = Local.with_ymd_and_hms(2026, 10, 8, 9, 30, 0).unwrap();
    assert_eq!(format_date(&when), "Oct 8, 2026");
}

#[test]
fn test_display_category_falls_back_to_category() {
    let mut prompt = sample(1, "T");
    prompt.tag = String::new();
    prompt.category = "legacy".to_string();
    assert_eq!(prompt.display_category(), "legacy");
}

// ============================================================================
// Drafts and edits
// ============================================================================

#[test]
fn test_draft_requires_title_and_content() {
    let config = Config::default();

    let no_title = PromptDraft {
        content: "body".to_string(),
        ..PromptDraft::default()
    };
    assert!(no_title.validate(&config).unwrap_err().to_string().contains("title"));

    let no_content = PromptDraft {
        title: "Title".to_string(),
        content: "  \n".to_string(),
        ..PromptDraft::default()
    };
    assert!(
        no_content
            .validate(&config)
            .unwrap_err()
            .to_string()
            .contains("content")
    );
}

#[test]
fn test_draft_length_limits() {
    let config = Config::default();

    let long_title = PromptDraft {
        title: "t".repeat(101),
        content: "body".to_string(),
        ..PromptDraft::default()
    };
    let err = long_title.validate(&config).unwrap_err();
    assert!(err.to_string().contains("title is too long: 101 characters (maximum 100)"));

    let long_description = PromptDraft {
        title: "ok".to_string(),
        content: "body".to_string(),
        description: "d".repeat(501),
        ..PromptDraft::default()
    };
    assert!(long_description.validate(&config).is_err());

    let at_limit = PromptDraft {
        title: "t".repeat(100),
        content: "c".repeat(2000),
        description: "d".repeat(500),
        ..PromptDraft::default()
    };
    assert!(at_limit.validate(&config).is_ok());
}

#[test]
fn test_draft_into_prompt_normalizes() {
    let draft = PromptDraft {
        title: "  Spaced  ".to_string(),
        category: " writing ".to_string(),
        content: "  keep {{me}} as is  ".to_string(),
        description: String::new(),
        tags: vec![" a ".to_string(), "".to_string(), "  ".to_string(), "b".to_string()],
    };
    let prompt = draft.into_prompt(7, "Oct 18, 2026".to_string(), &Config::default());

    assert_eq!(prompt.id, 7);
    assert_eq!(prompt.title, "Spaced");
    assert_eq!(prompt.category, "writing");
    assert_eq!(prompt.tag, "writing");
    assert_eq!(prompt.content, "  keep {{me}} as is  ");
    assert_eq!(prompt.tags, vec!["a", "b"]);
    assert_eq!(prompt.date, "Oct 18, 2026");
}

#[test]
fn test_apply_edit_rederives_fields() {
    let config = Config::default();
    let mut prompt = sample(1, "Original");

    prompt
        .apply_edit(
            PromptEdit {
                description: Some("Now described".to_string()),
                category: Some("".to_string()),
                tags: Some(vec!["x".to_string()]),
                ..PromptEdit::default()
            },
            &config,
        )
        .unwrap();

    assert_eq!(prompt.preview, "Now described");
    assert_eq!(prompt.tag, "Other");
    assert_eq!(prompt.tags, vec!["x"]);
    assert_eq!(prompt.title, "Original");
}

#[test]
fn test_apply_edit_invalid_leaves_prompt_untouched() {
    let config = Config::default();
    let mut prompt = sample(1, "Original");
    let before = prompt.clone();

    let result = prompt.apply_edit(
        PromptEdit {
            title: Some("New title".to_string()),
            content: Some(String::new()),
            ..PromptEdit::default()
        },
        &config,
    );

    assert!(matches!(result, Err(WalletError::UserError(_))));
    assert_eq!(prompt, before);
}

#[test]
fn test_edit_changed_fields() {
    let edit = PromptEdit {
        title: Some("t".to_string()),
        tags: Some(vec![]),
        ..PromptEdit::default()
    };
    assert_eq!(edit.changed_fields(), vec!["title", "tags"]);
    assert!(!edit.is_empty());
    assert!(PromptEdit::default().is_empty());
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_next_id_uses_timestamp() {
    assert_eq!(next_id(&[], 1_000).unwrap(), 1_000);
    assert_eq!(next_id(&[sample(500, "old")], 1_000).unwrap(), 1_000);
}

#[test]
fn test_next_id_bumps_past_existing() {
    let prompts = vec![sample(1_000, "a"), sample(3_000, "b")];
    assert_eq!(next_id(&prompts, 1_000).unwrap(), 3_001);
    assert_eq!(next_id(&prompts, 3_000).unwrap(), 3_001);
}

#[test]
fn test_next_id_at_largest_stored_id_is_storage_error() {
    let raw = r#"[{"id": 9223372036854775807, "title": "edge", "content": "c"}]"#;
    let prompts: Vec<Prompt> = serde_json::from_str(raw).unwrap();
    assert_eq!(prompts[0].id, i64::MAX);

    let result = next_id(&prompts, 1_000);
    assert!(matches!(result, Err(WalletError::StorageError(_))));
}

#[test]
fn test_find_prompt() {
    let prompts = vec![sample(1, "a"), sample(2, "b")];
    assert_eq!(find_prompt(&prompts, 2).unwrap().title, "b");
    assert!(find_prompt(&prompts, 3).is_none());
}

#[test]
fn test_filter_empty_matches_all() {
    let prompts = vec![sample(1, "a"), sample(2, "b")];
    assert_eq!(filter_prompts(&prompts, &PromptFilter::default()).len(), 2);
}

#[test]
fn test_filter_search_is_case_insensitive_substring() {
    let prompts = vec![sample(1, "Cover Letter"), sample(2, "Code Review")];
    let filter = PromptFilter {
        search: Some("co".to_string()),
        category: None,
    };
    assert_eq!(filter_prompts(&prompts, &filter).len(), 2);

    let filter = PromptFilter {
        search: Some("REVIEW".to_string()),
        category: None,
    };
    let found = filter_prompts(&prompts, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);
}

#[test]
fn test_filter_by_default_category() {
    let prompts = vec![sample(1, "a")];
    let filter = PromptFilter {
        search: None,
        category: Some("other".to_string()),
    };
    assert_eq!(filter_prompts(&prompts, &filter).len(), 1);
}

// ============================================================================
// JSON store
// ============================================================================

#[test]
fn test_store_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("prompts.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_store_empty_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prompts.json");
    std::fs::write(&path, "").unwrap();

    assert!(JsonFileStore::new(path).load().unwrap().is_empty());
}

#[test]
fn test_store_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("prompts.json"));
    let prompts = vec![sample(2, "b"), sample(1, "a")];

    store.save(&prompts).unwrap();
    assert_eq!(store.load().unwrap(), prompts);
}

#[test]
fn test_store_writes_pretty_json_array() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("prompts.json"));
    store.save(&[sample(1, "a")]).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"id\": 1,"));
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
}

#[test]
fn test_store_preserves_unknown_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prompts.json");
    std::fs::write(&path, LEGACY_FILE).unwrap();
    let store = JsonFileStore::new(&path);

    let prompts = store.load().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].category, "");
    assert_eq!(prompts[0].description, "");
    assert_eq!(prompts[0].display_category(), "documentation");
    assert_eq!(prompts[0].extra["favorite"], serde_json::Value::Bool(true));

    store.save(&prompts).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"favorite\": true"));
}

#[test]
fn test_store_rejects_non_array() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prompts.json");
    std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();

    let result = JsonFileStore::new(&path).load();
    assert!(matches!(result, Err(WalletError::StorageError(_))));
    // The unreadable file is left for the user to inspect.
    assert!(path.exists());
}

#[test]
fn test_store_delete_by_id() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("prompts.json"));
    store
        .save(&[sample(3, "c"), sample(2, "b"), sample(1, "a")])
        .unwrap();

    assert!(store.delete_by_id(2).unwrap());
    let ids: Vec<i64> = store.load().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);

    assert!(!store.delete_by_id(2).unwrap());
}
