//! In-memory probe for tests.
//!
//! # Example
//!
//! ```
//! use layoutcheck::probe::{FakeProbe, PathProbe, Probe};
//! use std::path::Path;
//!
//! let probe = FakeProbe::new()
//!     .with_dir("gradle/wrapper")
//!     .with_file("build.gradle");
//!
//! assert_eq!(probe.probe(Path::new("gradle/wrapper")), Probe::Directory);
//! assert_eq!(probe.probe(Path::new("settings.gradle")), Probe::Missing);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{PathProbe, Probe};
use crate::catalog::{Catalog, PathKind};

/// Probe that answers from a fixed table; unknown paths are missing.
#[derive(Debug, Clone, Default)]
pub struct FakeProbe {
    entries: HashMap<PathBuf, Probe>,
}

impl FakeProbe {
    /// Create an empty fake where every path is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fake where every catalog item exists with its declared kind.
    pub fn complete(catalog: &Catalog) -> Self {
        Self::complete_under(catalog, Path::new(""))
    }

    /// Like [`FakeProbe::complete`], with every path joined onto `root`.
    pub fn complete_under(catalog: &Catalog, root: &Path) -> Self {
        let mut probe = Self::new();
        for category in &catalog.categories {
            for item in &category.items {
                let path = root.join(&item.path);
                probe = match item.kind_or(category.kind) {
                    PathKind::File => probe.with_file(path),
                    PathKind::Directory => probe.with_dir(path),
                };
            }
        }
        probe
    }

    /// Record a file.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.entries.insert(path.as_ref().to_path_buf(), Probe::File);
        self
    }

    /// Record a directory.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.entries
            .insert(path.as_ref().to_path_buf(), Probe::Directory);
        self
    }

    /// Record a path whose lookup fails.
    pub fn with_inaccessible(mut self, path: impl AsRef<Path>, reason: &str) -> Self {
        self.entries.insert(
            path.as_ref().to_path_buf(),
            Probe::Inaccessible(reason.to_string()),
        );
        self
    }

    /// Forget a path so it reads as missing.
    pub fn without(mut self, path: impl AsRef<Path>) -> Self {
        self.entries.remove(path.as_ref());
        self
    }
}

impl PathProbe for FakeProbe {
    fn probe(&self, path: &Path) -> Probe {
        self.entries.get(path).cloned().unwrap_or(Probe::Missing)
    }
}
