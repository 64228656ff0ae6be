//! Implementation of the `pwallet list` command.
//!
//! Prints the stored prompts, newest first, optionally filtered by title
//! and category. An empty wallet is seeded with the sample prompts first.

use crate::cli::ListArgs;
use crate::context::WalletContext;
use crate::error::Result;
use crate::events::{Event, EventAction, record_event};
use crate::prompt::{Prompt, PromptFilter};
use chrono::Local;
use serde_json::json;

use super::open_wallet;

/// Execute the `pwallet list` command.
pub fn cmd_list(ctx: &WalletContext, args: ListArgs) -> Result<()> {
    let wallet = open_wallet(ctx)?;

    let seeded = wallet.seed_if_empty(Local::now())?;
    if !seeded.is_empty() {
        record_event(
            ctx,
            wallet.config(),
            Event::new(EventAction::Seed).with_details(json!({ "count": seeded.len() })),
        );
    }

    let filter = PromptFilter {
        search: args.search,
        category: args.category,
    };
    let prompts = wallet.search(&filter)?;

    if prompts.is_empty() {
        if filter.is_empty() {
            println!("No prompts yet. Create one with `pwallet new`.");
        } else {
            println!("No prompts match the given filters.");
        }
        return Ok(());
    }

    for prompt in &prompts {
        print_summary(prompt);
    }
    println!();
    println!("{} prompt(s)", prompts.len());

    Ok(())
}

fn print_summary(prompt: &Prompt) {
    println!(
        "{:<15} {}  [{}]  {}",
        prompt.id,
        prompt.title,
        prompt.display_category(),
        prompt.date
    );
    if !prompt.preview.is_empty() {
        println!("{:<15} {}", "", prompt.preview.replace('\n', " "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::read_events;
    use crate::samples::sample_drafts;
    use crate::test_support::{add_prompt, stored_prompts, temp_wallet, write_config};

    #[test]
    fn test_list_seeds_empty_wallet() {
        let (_temp_dir, ctx) = temp_wallet();

        cmd_list(&ctx, ListArgs::default()).unwrap();

        assert_eq!(stored_prompts(&ctx).len(), sample_drafts().len());
        let events = read_events(&ctx).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::Seed);
    }

    #[test]
    fn test_list_does_not_reseed() {
        let (_temp_dir, ctx) = temp_wallet();
        add_prompt(&ctx, "Mine", "only one");

        cmd_list(&ctx, ListArgs::default()).unwrap();

        let prompts = stored_prompts(&ctx);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].title, "Mine");
    }

    #[test]
    fn test_list_respects_seed_samples_off() {
        let (_temp_dir, ctx) = temp_wallet();
        write_config(&ctx, "seed_samples: false\n");

        cmd_list(&ctx, ListArgs::default()).unwrap();

        assert!(stored_prompts(&ctx).is_empty());
        assert!(read_events(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_list_with_filters() {
        let (_temp_dir, ctx) = temp_wallet();
        add_prompt(&ctx, "Cover letter", "Dear {{company}}");

        let args = ListArgs {
            search: Some("nothing matches".to_string()),
            category: None,
        };
        assert!(cmd_list(&ctx, args).is_ok());
    }

    #[test]
    fn test_list_rejects_corrupt_store() {
        let (_temp_dir, ctx) = temp_wallet();
        std::fs::write(ctx.data_dir.join("prompts.json"), "not json").unwrap();

        let err = cmd_list(&ctx, ListArgs::default()).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::STORAGE_FAILURE);
    }
}
