//! Filesystem queries behind the presence checks.
//!
//! The checker never touches the filesystem directly; it asks a
//! [`PathProbe`] what is at a path. [`FsProbe`] answers from the real
//! filesystem and [`FakeProbe`] from an in-memory table.

pub mod fake;

pub use fake::FakeProbe;

use std::io::ErrorKind;
use std::path::Path;

/// What a probe found at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// A directory.
    Directory,
    /// Something that is not a directory (regular file, device, etc.).
    File,
    /// Nothing there, including dangling symlinks.
    Missing,
    /// The query failed for a reason other than not-found.
    Inaccessible(String),
}

impl Probe {
    /// Whether anything was found.
    pub fn exists(&self) -> bool {
        matches!(self, Self::Directory | Self::File)
    }

    /// Whether a directory was found.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Capability to look up what exists at a path.
pub trait PathProbe {
    /// Inspect a single path.
    fn probe(&self, path: &Path) -> Probe;
}

/// Probe backed by the real filesystem.
///
/// Follows symlinks, so a link to a directory counts as a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn probe(&self, path: &Path) -> Probe {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Probe::Directory,
            Ok(_) => Probe::File,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Probe::Missing
            }
            Err(e) => Probe::Inaccessible(e.to_string()),
        }
    }
}
