//! Implementation of the `pwallet show` command.
//!
//! Displays one prompt: metadata, detected placeholders and content.

use crate::cli::IdArgs;
use crate::context::WalletContext;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::template::{detect, has_placeholders};

use super::open_wallet;

/// Execute the `pwallet show` command.
pub fn cmd_show(ctx: &WalletContext, args: IdArgs) -> Result<()> {
    let wallet = open_wallet(ctx)?;
    let prompt = wallet.get(args.id)?;
    print!("{}", format_prompt(&prompt));
    Ok(())
}

fn format_prompt(prompt: &Prompt) -> String {
    let mut out = String::new();
    out.push_str(&format!("Prompt: {}\n", prompt.id));
    out.push('\n');
    out.push_str(&format!("  Title:       {}\n", prompt.title));
    out.push_str(&format!("  Category:    {}\n", prompt.display_category()));
    out.push_str(&format!("  Date:        {}\n", prompt.date));

    if !prompt.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", prompt.description));
    }

    if !prompt.tags.is_empty() {
        out.push_str(&format!("  Tags:        {}\n", prompt.tags.join(", ")));
    }

    if has_placeholders(&prompt.content) {
        out.push_str(&format!("  Variables:   {}\n", detect(&prompt.content).join(", ")));
    } else {
        out.push_str("  Variables:   (none)\n");
    }

    out.push('\n');
    out.push_str("---\n");
    out.push_str(&format!("{}\n", prompt.content));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use crate::test_support::{add_prompt, temp_wallet};

    #[test]
    fn test_show_existing_prompt() {
        let (_temp_dir, ctx) = temp_wallet();
        let prompt = add_prompt(&ctx, "Greeting", "Hello {{name}}");

        assert!(cmd_show(&ctx, IdArgs { id: prompt.id }).is_ok());
    }

    #[test]
    fn test_format_prompt_lists_metadata_and_variables() {
        let (_temp_dir, ctx) = temp_wallet();
        let mut prompt = add_prompt(&ctx, "Greeting", "Hello {{name}} from {{city}}, {{name}}");
        prompt.tags = vec!["social".to_string(), "short".to_string()];

        let out = format_prompt(&prompt);

        assert!(out.starts_with(&format!("Prompt: {}\n", prompt.id)));
        assert!(out.contains("  Title:       Greeting\n"));
        assert!(out.contains("  Category:    Other\n"));
        assert!(out.contains("  Tags:        social, short\n"));
        assert!(out.contains("  Variables:   name, city\n"));
        assert!(!out.contains("Description:"));
        assert!(out.ends_with("---\nHello {{name}} from {{city}}, {{name}}\n"));
    }

    #[test]
    fn test_format_prompt_without_variables() {
        let (_temp_dir, ctx) = temp_wallet();
        let prompt = add_prompt(&ctx, "Plain", "Nothing to fill {here}");

        let out = format_prompt(&prompt);
        assert!(out.contains("  Variables:   (none)\n"));
    }

    #[test]
    fn test_show_missing_prompt() {
        let (_temp_dir, ctx) = temp_wallet();

        let err = cmd_show(&ctx, IdArgs { id: 12 }).unwrap_err();
        assert!(matches!(err, WalletError::NotFound(12)));
        assert!(err.to_string().contains("does not exist"));
    }
}
