//! Implementation of the `pwallet vars` command.

use crate::cli::IdArgs;
use crate::context::WalletContext;
use crate::error::Result;
use crate::template::detect;

use super::open_wallet;

/// Execute the `pwallet vars` command.
///
/// Prints each distinct placeholder name on its own line, in order of
/// first appearance. A prompt without placeholders prints nothing.
pub fn cmd_vars(ctx: &WalletContext, args: IdArgs) -> Result<()> {
    let wallet = open_wallet(ctx)?;
    let prompt = wallet.get(args.id)?;

    print!("{}", format_vars(&prompt.content));
    Ok(())
}

fn format_vars(content: &str) -> String {
    let mut out = String::new();
    for name in detect(content) {
        out.push_str(&format!("{}\n", name));
    }
    out
}
