//! Implementation of the `pwallet edit` command.
//!
//! Changes only the fields given on the command line. Id and creation
//! date never change.

use crate::cli::EditArgs;
use crate::context::WalletContext;
use crate::error::Result;
use crate::events::{Event, EventAction, record_event};
use crate::prompt::PromptEdit;
use serde_json::json;

use super::{open_wallet, read_text_file};

/// Execute the `pwallet edit` command.
pub fn cmd_edit(ctx: &WalletContext, args: EditArgs) -> Result<()> {
    let id = args.id;
    let edit = edit_from_args(args)?;
    let fields = edit.changed_fields();

    let wallet = open_wallet(ctx)?;
    let prompt = wallet.update(id, edit)?;

    record_event(
        ctx,
        wallet.config(),
        Event::new(EventAction::Update)
            .with_prompt(prompt.id)
            .with_details(json!({ "fields": fields })),
    );

    println!("Updated prompt: {}", prompt.id);
    println!("  Changed: {}", fields.join(", "));

    Ok(())
}

fn edit_from_args(args: EditArgs) -> Result<PromptEdit> {
    let content = match (args.content, &args.file) {
        (Some(content), _) => Some(content),
        (None, Some(path)) => Some(read_text_file(path)?),
        (None, None) => None,
    };

    let tags = if args.clear_tags {
        Some(Vec::new())
    } else {
        args.tags
    };

    Ok(PromptEdit {
        title: args.title,
        category: args.category,
        content,
        description: args.description,
        tags,
    })
}
