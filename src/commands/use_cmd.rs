//! Implementation of the `pwallet use` command.
//!
//! Fills a prompt's placeholders from `--set NAME=VALUE` pairs and,
//! optionally, from answers read on stdin. Prints the rendered text, or a
//! preview plus the list of unfilled names. With `--copy` the result goes
//! to the clipboard, which is refused while anything is unfilled.

use crate::cli::UseArgs;
use crate::config::Config;
use crate::context::WalletContext;
use crate::copy::{Clipboard, SystemClipboard, copy};
use crate::error::{Result, WalletError};
use crate::events::{Event, EventAction, record_event};
use crate::template::{RenderResult, TemplateSession};
use serde_json::json;
use std::io::{self, BufRead, Write};
use tracing::warn;

use super::open_wallet;

/// Execute the `pwallet use` command.
pub fn cmd_use(ctx: &WalletContext, args: UseArgs) -> Result<()> {
    let wallet = open_wallet(ctx)?;
    let prompt = wallet.get(args.id)?;

    let mut session = TemplateSession::new(prompt.content.as_str());
    apply_assignments(&mut session, &args.set)?;

    if args.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        ask_missing(&mut session, &mut input, &mut io::stderr())?;
    }

    let result = session.render();
    print_result(&result);

    if args.copy {
        let mut clipboard = SystemClipboard;
        copy_result(ctx, wallet.config(), prompt.id, &result, &mut clipboard)?;
        eprintln!("Copied to clipboard.");
    }

    Ok(())
}

/// Split a `NAME=VALUE` argument at the first `=`.
///
/// The name is kept verbatim, so `" name =x"` binds the placeholder
/// `{{ name }}`.
fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(WalletError::UserError(format!(
            "invalid --set value '{}': expected NAME=VALUE",
            raw
        ))),
    }
}

/// Bind every `NAME=VALUE` pair. Names the prompt does not use are ignored.
fn apply_assignments(session: &mut TemplateSession, assignments: &[String]) -> Result<()> {
    for raw in assignments {
        let (name, value) = parse_assignment(raw)?;
        if !session.bind(name, value) {
            warn!(name, "prompt has no such placeholder, ignoring value");
        }
    }
    Ok(())
}

/// Ask for each unfilled placeholder on `output` and read answers from `input`.
///
/// An empty answer leaves the placeholder unfilled. Input ending early
/// stops the questions.
fn ask_missing(
    session: &mut TemplateSession,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<()> {
    for name in session.missing() {
        write!(output, "{}: ", name)
            .and_then(|()| output.flush())
            .map_err(|e| WalletError::UserError(format!("failed to write question: {}", e)))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| WalletError::UserError(format!("failed to read input: {}", e)))?;
        if read == 0 {
            break;
        }

        let value = line.trim_end_matches(['\n', '\r']);
        session.bind(&name, value);
    }
    Ok(())
}

fn print_result(result: &RenderResult) {
    println!("{}", result.display_text());

    if let Some(notice) = missing_notice(result) {
        eprint!("{}", notice);
    }
}

/// The hint printed after an incomplete result, naming what is unfilled.
fn missing_notice(result: &RenderResult) -> Option<String> {
    if result.is_ready() {
        return None;
    }

    let mut notice = String::from("\n");
    notice.push_str(&format!("Missing values: {}\n", result.missing().join(", ")));
    notice.push_str("Pass them with --set NAME=VALUE or use --interactive.\n");
    Some(notice)
}

/// Copy `result` to `clipboard` and record the copy in the audit log.
fn copy_result(
    ctx: &WalletContext,
    config: &Config,
    prompt_id: i64,
    result: &RenderResult,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    copy(result, clipboard)?;

    record_event(
        ctx,
        config,
        Event::new(EventAction::Copy)
            .with_prompt(prompt_id)
            .with_details(json!({ "chars": result.display_text().chars().count() })),
    );
    Ok(())
}
