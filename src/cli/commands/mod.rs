//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running without a subcommand is
//! the same as `layoutcheck check`.

pub mod catalog;
pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod schema;

pub use dispatcher::{
    exit_code_for, CatalogSelection, Command, CommandDispatcher, CommandResult, EXIT_CATALOG,
    EXIT_ERROR, EXIT_MISSING,
};
