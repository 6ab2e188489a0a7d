//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::alias_cmd;
use super::output::{Output, OutputFormat};
use crate::domain::{is_slug, slugify};
use crate::storage::{AliasStore, StoreConfig, ALIASES_PATH_ENV, JSON_PATH_ENV};

/// Register aliases.
///
/// Pass no arguments to list aliases. Pass only the ALIAS to remove it.
#[derive(Parser)]
#[command(name = "alie")]
#[command(author, version, about = "Register shell aliases and functions")]
pub struct Cli {
    /// Alias name (normalized to lowercase words joined by `_`)
    pub alias: Option<String>,

    /// Command the alias expands to
    pub command: Option<String>,

    /// Register the command as a shell function instead of an alias
    #[arg(long, short = 'f')]
    pub is_function: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the JSON alias store [default: ~/.alie.json]
    #[arg(long, env = JSON_PATH_ENV, value_name = "PATH")]
    pub json_path: Option<PathBuf>,

    /// Path to the generated shell file [default: ~/.alie]
    #[arg(long, env = ALIASES_PATH_ENV, value_name = "PATH")]
    pub aliases_path: Option<PathBuf>,
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Create {
        name: String,
        command: String,
        is_function: bool,
    },
    Remove {
        name: String,
    },
}

impl Cli {
    /// Decides the action from the positional arguments
    ///
    /// An alias that normalizes to nothing lists, and an empty command removes.
    pub fn action(&self) -> Action {
        let name = self.alias.as_deref().map(slugify).unwrap_or_default();

        if name.is_empty() {
            return Action::List;
        }

        match self.command.as_deref().filter(|c| !c.is_empty()) {
            Some(command) => Action::Create {
                name,
                command: command.to_string(),
                is_function: self.is_function,
            },
            None => Action::Remove { name },
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::detect(cli.format, cli.verbose);

    output.verbose("alie starting");

    let config = StoreConfig::resolve(cli.json_path.clone(), cli.aliases_path.clone())
        .context("Failed to resolve alie file locations")?;
    output.verbose_ctx(
        "config",
        &format!(
            "Store: {}, shell file: {}",
            config.json_path.display(),
            config.aliases_path.display()
        ),
    );

    let store = AliasStore::new(config);
    let action = cli.action();

    if let Some(raw) = cli.alias.as_deref().filter(|raw| !is_slug(raw)) {
        output.verbose_ctx("slug", &format!("Normalized '{}' to '{}'", raw, slugify(raw)));
    }

    match action {
        Action::List => alias_cmd::list(&store, &output)?,
        Action::Create {
            name,
            command,
            is_function,
        } => alias_cmd::create(&store, &output, &name, &command, is_function)?,
        Action::Remove { name } => alias_cmd::remove(&store, &output, &name)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("alie").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_lists() {
        assert_eq!(parse(&[]).action(), Action::List);
    }

    #[test]
    fn unusable_alias_lists() {
        assert_eq!(parse(&["!!!"]).action(), Action::List);
    }

    #[test]
    fn one_argument_removes() {
        assert_eq!(
            parse(&["Git Log"]).action(),
            Action::Remove {
                name: "git_log".to_string()
            }
        );
    }

    #[test]
    fn empty_command_removes() {
        assert_eq!(
            parse(&["ll", ""]).action(),
            Action::Remove {
                name: "ll".to_string()
            }
        );
    }

    #[test]
    fn two_arguments_create() {
        assert_eq!(
            parse(&["ll", "ls -la"]).action(),
            Action::Create {
                name: "ll".to_string(),
                command: "ls -la".to_string(),
                is_function: false,
            }
        );
    }

    #[test]
    fn function_flag() {
        assert_eq!(
            parse(&["say", "echo \"$@\"", "-f"]).action(),
            Action::Create {
                name: "say".to_string(),
                command: "echo \"$@\"".to_string(),
                is_function: true,
            }
        );
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
