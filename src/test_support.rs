//! Shared fixtures for command tests.

use crate::context::WalletContext;
use crate::prompt::{JsonFileStore, Prompt, PromptDraft, PromptStore};
use std::path::Path;
use tempfile::TempDir;

/// A fresh data directory and a context pointing at it.
pub(crate) fn temp_wallet() -> (TempDir, WalletContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WalletContext::at(temp_dir.path());
    (temp_dir, ctx)
}

/// Write `config.yaml` into the context's data directory.
pub(crate) fn write_config(ctx: &WalletContext, yaml: &str) {
    std::fs::create_dir_all(&ctx.data_dir).unwrap();
    std::fs::write(ctx.config_path(), yaml).unwrap();
}

/// Load every prompt from the default store file.
pub(crate) fn stored_prompts(ctx: &WalletContext) -> Vec<Prompt> {
    JsonFileStore::new(ctx.data_dir.join("prompts.json"))
        .load()
        .unwrap()
}

/// Store one prompt built from `title` and `content` and return it.
pub(crate) fn add_prompt(ctx: &WalletContext, title: &str, content: &str) -> Prompt {
    let wallet = crate::commands::open_wallet(ctx).unwrap();
    wallet
        .create(
            PromptDraft {
                title: title.to_string(),
                content: content.to_string(),
                ..PromptDraft::default()
            },
            chrono::Local::now(),
        )
        .unwrap()
}

/// Write a text file under `dir` and return its path.
pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
