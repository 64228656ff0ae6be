//! Implementation of the `pwallet history` command.

use crate::cli::HistoryArgs;
use crate::context::WalletContext;
use crate::error::Result;
use crate::events::{Event, read_events};

/// Execute the `pwallet history` command.
///
/// Prints the most recent `limit` audit log entries, oldest first.
pub fn cmd_history(ctx: &WalletContext, args: HistoryArgs) -> Result<()> {
    let events = read_events(ctx)?;
    if events.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for event in recent(&events, args.limit) {
        println!("{}", format_event(event));
    }

    Ok(())
}

fn recent(events: &[Event], limit: usize) -> &[Event] {
    &events[events.len().saturating_sub(limit)..]
}

fn format_event(event: &Event) -> String {
    let prompt = event
        .prompt
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {:<7} {:<15} {}",
        event.ts.format("%Y-%m-%d %H:%M:%S"),
        event.action.to_string(),
        prompt,
        event.actor
    )
}
