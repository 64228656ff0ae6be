//! CLI argument parsing for pwallet.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Prompt Wallet: store, edit and reuse text prompts.
///
/// Prompt content may contain `{{placeholder}}` slots. `pwallet use`
/// asks for a value for each one and prints (or copies) the result.
#[derive(Parser, Debug)]
#[command(name = "pwallet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding prompts.json, config.yaml and events.ndjson.
    #[arg(long, global = true, env = "PROMPT_WALLET_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for pwallet.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List saved prompts.
    ///
    /// On first use, an empty wallet is filled with sample prompts
    /// (disable with `seed_samples: false` in config.yaml).
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a prompt with its metadata and placeholders.
    Show(IdArgs),

    /// Create a new prompt.
    New(NewArgs),

    /// Create a new prompt from a .txt or .md file.
    ///
    /// The file name (without extension) becomes the title unless
    /// --title is given.
    Import(ImportArgs),

    /// Edit an existing prompt. Only the given fields change.
    Edit(EditArgs),

    /// Delete a prompt.
    ///
    /// Requires --yes to confirm.
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List the placeholders of a prompt.
    Vars(IdArgs),

    /// Fill in a prompt's placeholders and print the result.
    ///
    /// Values come from --set NAME=VALUE and, with --interactive, from
    /// stdin. --copy writes the result to the clipboard, which is refused
    /// while any placeholder is still empty.
    Use(UseArgs),

    /// Show recent entries of the audit log.
    History(HistoryArgs),
}

/// Arguments for the `list` command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show prompts whose title contains this text (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show prompts in this category.
    #[arg(short, long)]
    pub category: Option<String>,
}

/// A single prompt id argument.
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Prompt id (see `pwallet list`).
    pub id: i64,
}

/// Optional metadata shared by `new` and `import`.
#[derive(Args, Debug, Default)]
pub struct MetadataArgs {
    /// Category (defaults to "Other" when omitted).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Short description, shown as the preview.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Tags, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

/// Arguments for the `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Title of the prompt.
    pub title: String,

    /// Prompt content.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub content: Option<String>,

    /// Read prompt content from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

/// Arguments for the `import` command.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Text file to import (.txt or .md).
    pub file: PathBuf,

    /// Title (defaults to the file name without extension).
    #[arg(short, long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

/// Arguments for the `edit` command.
#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Prompt id to edit.
    pub id: i64,

    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New category (an empty value resets it to the default).
    #[arg(long)]
    pub category: Option<String>,

    /// New content.
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read new content from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,

    /// Replace the tags, comma separated.
    #[arg(long, value_delimiter = ',', conflicts_with = "clear_tags")]
    pub tags: Option<Vec<String>>,

    /// Remove all tags.
    #[arg(long)]
    pub clear_tags: bool,
}

/// Arguments for the `delete` command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Prompt id to delete.
    pub id: i64,

    /// Confirm the deletion.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `use` command.
#[derive(Args, Debug, Default)]
pub struct UseArgs {
    /// Prompt id to use.
    pub id: i64,

    /// Placeholder value as NAME=VALUE (repeatable).
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Ask on stdin for every placeholder still empty.
    #[arg(short, long)]
    pub interactive: bool,

    /// Copy the result to the system clipboard.
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the `history` command.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of most recent entries to show.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_use_with_bindings() {
        let cli = Cli::try_parse_from([
            "pwallet", "use", "42", "--set", "name=Ada", "-s", "id=7", "--copy",
        ])
        .unwrap();

        match cli.command {
            Command::Use(args) => {
                assert_eq!(args.id, 42);
                assert_eq!(args.set, vec!["name=Ada", "id=7"]);
                assert!(args.copy);
                assert!(!args.interactive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_new_requires_content_or_file() {
        assert!(Cli::try_parse_from(["pwallet", "new", "Title"]).is_err());
        assert!(
            Cli::try_parse_from(["pwallet", "new", "Title", "--content", "x", "--file", "a.txt"])
                .is_err()
        );

        let cli = Cli::try_parse_from([
            "pwallet", "new", "Title", "--content", "Hi {{name}}", "--tags", "a,b",
        ])
        .unwrap();
        match cli.command {
            Command::New(args) => {
                assert_eq!(args.content.as_deref(), Some("Hi {{name}}"));
                assert_eq!(args.metadata.tags, vec!["a", "b"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pwallet", "list", "-vv", "--home", "/tmp/w"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/w")));
    }

    #[test]
    fn parse_edit_tags_conflict() {
        assert!(
            Cli::try_parse_from(["pwallet", "edit", "1", "--tags", "a", "--clear-tags"]).is_err()
        );
    }

    #[test]
    fn parse_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["pwallet", "ls"]).unwrap().command,
            Command::List(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["pwallet", "rm", "3", "--yes"]).unwrap().command,
            Command::Delete(_)
        ));
    }
}
