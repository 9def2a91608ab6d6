//! Shell completions generation.
//!
//! The `layoutcheck completions <shell>` command prints a completion script
//! covering the subcommands and the global catalog flags.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;
use clap::CommandFactory;
use clap_complete::Shell;

use super::dispatcher::{Command, CommandResult};

/// Binary name the generated script registers completions for.
const BIN_NAME: &str = "layoutcheck";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for `shell`.
pub fn completion_script(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    Ok(String::from_utf8(buf).map_err(anyhow::Error::from)?)
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let script = completion_script(self.args.shell)?;
        ui.message(script.trim_end());
        Ok(CommandResult::success())
    }
}
