//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CatalogSelection`] for the global catalog flags
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::catalog::{resolve_catalog, Catalog, CatalogSource, DEFAULT_PRESET};
use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code when at least one cataloged path is missing.
pub const EXIT_MISSING: i32 = 1;

/// Exit code when the catalog cannot be loaded or is invalid.
pub const EXIT_CATALOG: i32 = 2;

/// Exit code when a command fails for any other reason.
pub const EXIT_ERROR: i32 = 3;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Which catalog the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSelection {
    /// Explicit catalog file, if any.
    pub path: Option<PathBuf>,
    /// Built-in preset used as the fallback.
    pub preset: String,
}

impl Default for CatalogSelection {
    fn default() -> Self {
        Self {
            path: None,
            preset: DEFAULT_PRESET.to_string(),
        }
    }
}

impl CatalogSelection {
    /// Resolve the catalog, reporting failures through the UI.
    ///
    /// Returns `None` after printing the error when the catalog cannot be
    /// loaded or fails validation.
    pub fn resolve_or_report(
        &self,
        project_root: &Path,
        ui: &mut dyn UserInterface,
    ) -> Option<(CatalogSource, Catalog)> {
        match resolve_catalog(project_root, self.path.as_deref(), &self.preset) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                tracing::debug!("Catalog resolution failed: {:?}", e);
                ui.error(&e.to_string());
                None
            }
        }
    }
}

/// Turn a command outcome into the process exit code.
///
/// Errors are printed through the UI and map to [`EXIT_ERROR`], so code 1
/// only ever means a cataloged path is missing.
pub fn exit_code_for(result: Result<CommandResult>, ui: &mut dyn UserInterface) -> i32 {
    match result {
        Ok(result) => result.exit_code,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            ui.error(&format!("Error: {}", e));
            EXIT_ERROR
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    catalog: CatalogSelection,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            catalog: CatalogSelection::default(),
        }
    }

    /// Use a specific catalog selection.
    pub fn with_catalog(mut self, catalog: CatalogSelection) -> Self {
        self.catalog = catalog;
        self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(
                    &self.project_root,
                    self.catalog.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Catalog(args)) => {
                let cmd = super::catalog::CatalogCommand::new(
                    &self.project_root,
                    self.catalog.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand.execute(ui),
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to check with default args
                let cmd = super::check::CheckCommand::new(
                    &self.project_root,
                    self.catalog.clone(),
                    CheckArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
