//! layoutcheck - presence checks for a project's expected layout.
//!
//! layoutcheck verifies that every file and directory an Android project
//! is expected to contain exists before a build is attempted. It does not
//! read file contents or run any build tool; it only checks presence.
//!
//! # Modules
//!
//! - [`catalog`] - The list of expected paths: schema, presets, loading, validation
//! - [`checker`] - The presence checks and their structured report
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Filesystem queries (real and fake)
//! - [`ui`] - Terminal output and report rendering
//!
//! # Example
//!
//! ```
//! use layoutcheck::catalog::{load_preset, DEFAULT_PRESET};
//! use layoutcheck::checker::run_all_checks;
//! use layoutcheck::probe::FakeProbe;
//! use std::path::Path;
//!
//! let catalog = load_preset(DEFAULT_PRESET).unwrap();
//! let probe = FakeProbe::complete(&catalog).without("settings.gradle");
//!
//! let report = run_all_checks(&catalog, &probe, Path::new(""));
//! assert!(!report.passed());
//! assert_eq!(report.failures().next().unwrap().path, "settings.gradle");
//! ```

pub mod catalog;
pub mod checker;
pub mod cli;
pub mod error;
pub mod probe;
pub mod ui;

pub use error::{LayoutError, Result};
