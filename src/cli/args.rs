//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::DEFAULT_PRESET;

/// layoutcheck - check that a project's expected files and directories exist.
#[derive(Debug, Parser)]
#[command(name = "layoutcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a catalog file (overrides .layoutcheck.yml and --preset)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Built-in catalog to use when no catalog file is found
    #[arg(long, global = true, default_value = DEFAULT_PRESET)]
    pub preset: String,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Explain failures and show where the catalog came from
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show missing paths and the final result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that every cataloged path exists (default if no command specified)
    Check(CheckArgs),

    /// Show the catalog that would be checked
    Catalog(CatalogArgs),

    /// Print the JSON Schema for catalog files
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `catalog` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    /// List built-in presets instead
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
