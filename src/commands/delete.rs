//! Implementation of the `pwallet delete` command.

use crate::cli::DeleteArgs;
use crate::context::WalletContext;
use crate::error::{Result, WalletError};
use crate::events::{Event, EventAction, record_event};
use serde_json::json;

use super::open_wallet;

/// Execute the `pwallet delete` command.
///
/// Deletion is permanent, so it requires `--yes`.
pub fn cmd_delete(ctx: &WalletContext, args: DeleteArgs) -> Result<()> {
    let wallet = open_wallet(ctx)?;

    if !args.yes {
        let prompt = wallet.get(args.id)?;
        return Err(WalletError::UserError(format!(
            "refusing to delete prompt {} (\"{}\") without confirmation.\n\
             Re-run with --yes to delete it.",
            prompt.id, prompt.title
        )));
    }

    let removed = wallet.delete(args.id)?;

    record_event(
        ctx,
        wallet.config(),
        Event::new(EventAction::Delete)
            .with_prompt(removed.id)
            .with_details(json!({ "title": removed.title })),
    );

    println!("Deleted prompt: {} ({})", removed.id, removed.title);
    Ok(())
}
