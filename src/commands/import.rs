//! Implementation of the `pwallet import` command.
//!
//! Creates a prompt from a plain-text or Markdown file. The file's name
//! without extension becomes the title unless one is given.

use crate::cli::ImportArgs;
use crate::context::WalletContext;
use crate::error::{Result, WalletError};
use crate::events::{Event, EventAction, record_event};
use chrono::Local;
use serde_json::json;
use std::path::Path;

use super::{draft_from_args, open_wallet, read_text_file};

/// File extensions accepted by `import`, compared case-insensitively.
const IMPORT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Execute the `pwallet import` command.
pub fn cmd_import(ctx: &WalletContext, args: ImportArgs) -> Result<()> {
    check_extension(&args.file)?;

    let content = read_text_file(&args.file)?;
    let title = match args.title {
        Some(title) => title,
        None => title_from_path(&args.file),
    };

    let wallet = open_wallet(ctx)?;
    let draft = draft_from_args(title, content, args.metadata);
    let prompt = wallet.create(draft, Local::now())?;

    record_event(
        ctx,
        wallet.config(),
        Event::new(EventAction::Import)
            .with_prompt(prompt.id)
            .with_details(json!({
                "title": prompt.title,
                "source": args.file.display().to_string(),
            })),
    );

    println!("Imported prompt: {}", prompt.id);
    println!();
    println!("  Title:  {}", prompt.title);
    println!("  Source: {}", args.file.display());

    Ok(())
}

fn check_extension(path: &Path) -> Result<()> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMPORT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });

    if !accepted {
        return Err(WalletError::UserError(format!(
            "Please provide a text file (.txt or .md): '{}'",
            path.display()
        )));
    }
    Ok(())
}

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
