//! Implementation of the `pwallet new` command.

use crate::cli::NewArgs;
use crate::context::WalletContext;
use crate::error::{Result, WalletError};
use crate::events::{Event, EventAction, record_event};
use crate::template::{detect, has_placeholders};
use chrono::Local;
use serde_json::json;

use super::{draft_from_args, open_wallet, read_text_file};

/// Execute the `pwallet new` command.
///
/// Content comes from `--content` or from the file given with `--file`.
pub fn cmd_new(ctx: &WalletContext, args: NewArgs) -> Result<()> {
    let content = match (args.content, &args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => read_text_file(path)?,
        (None, None) => {
            return Err(WalletError::UserError(
                "prompt content is required: pass --content or --file".to_string(),
            ));
        }
    };

    let wallet = open_wallet(ctx)?;
    let draft = draft_from_args(args.title, content, args.metadata);
    let prompt = wallet.create(draft, Local::now())?;

    record_event(
        ctx,
        wallet.config(),
        Event::new(EventAction::Create)
            .with_prompt(prompt.id)
            .with_details(json!({ "title": prompt.title })),
    );

    println!("Created prompt: {}", prompt.id);
    println!();
    println!("  Title:     {}", prompt.title);
    println!("  Category:  {}", prompt.display_category());
    if has_placeholders(&prompt.content) {
        println!("  Variables: {}", detect(&prompt.content).join(", "));
    }
    println!();
    println!("Run `pwallet use {}` to fill it in.", prompt.id);

    Ok(())
}
