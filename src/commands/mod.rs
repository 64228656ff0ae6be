//! Command implementations for pwallet.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share for opening the wallet
//! and reading text files.

mod delete;
mod edit;
mod history;
mod import;
mod list;
mod new;
mod show;
mod use_cmd;
mod vars;

use crate::cli::{Cli, Command, MetadataArgs};
use crate::context::WalletContext;
use crate::error::{Result, WalletError};
use crate::prompt::{JsonFileStore, PromptDraft};
use crate::wallet::Wallet;
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// Resolves the data directory first; every command runs against it.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = WalletContext::resolve(cli.home.as_deref())?;
    debug!(data_dir = %ctx.data_dir.display(), "resolved data directory");

    match cli.command {
        Command::List(args) => list::cmd_list(&ctx, args),
        Command::Show(args) => show::cmd_show(&ctx, args),
        Command::New(args) => new::cmd_new(&ctx, args),
        Command::Import(args) => import::cmd_import(&ctx, args),
        Command::Edit(args) => edit::cmd_edit(&ctx, args),
        Command::Delete(args) => delete::cmd_delete(&ctx, args),
        Command::Vars(args) => vars::cmd_vars(&ctx, args),
        Command::Use(args) => use_cmd::cmd_use(&ctx, args),
        Command::History(args) => history::cmd_history(&ctx, args),
    }
}

/// Open the wallet stored under `ctx` with its configured store file.
pub(crate) fn open_wallet(ctx: &WalletContext) -> Result<Wallet<JsonFileStore>> {
    let config = ctx.load_config()?;
    let store = JsonFileStore::new(ctx.store_path(&config));
    Ok(Wallet::new(store, config))
}

/// Read a text file given on the command line.
pub(crate) fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        WalletError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Build a draft from a title, content and the shared metadata flags.
pub(crate) fn draft_from_args(title: String, content: String, metadata: MetadataArgs) -> PromptDraft {
    PromptDraft {
        title,
        category: metadata.category.unwrap_or_default(),
        content,
        description: metadata.description.unwrap_or_default(),
        tags: metadata.tags,
    }
}
