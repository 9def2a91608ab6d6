//! Presence checks.
//!
//! [`run_all_checks`] walks a catalog in order and asks a [`PathProbe`]
//! about every item. It never stops early and never fails: a missing path
//! is recorded in the returned [`CheckReport`], and the aggregate result is
//! derived from that report.
//!
//! # Example
//!
//! ```
//! use layoutcheck::catalog::{Catalog, CheckCategory, CheckItem, PathKind};
//! use layoutcheck::checker::run_all_checks;
//! use layoutcheck::probe::FakeProbe;
//! use std::path::Path;
//!
//! let catalog = Catalog {
//!     categories: vec![CheckCategory::new("Root files", PathKind::File)
//!         .with_item(CheckItem::new("build.gradle", "Root build file"))
//!         .with_item(CheckItem::new("settings.gradle", "Settings file"))],
//!     ..Default::default()
//! };
//!
//! let probe = FakeProbe::new().with_file("build.gradle");
//! let report = run_all_checks(&catalog, &probe, Path::new(""));
//!
//! assert!(!report.passed());
//! assert_eq!(report.summary().failed, 1);
//! ```

pub mod report;

pub use report::{CategoryReport, CheckOutcome, CheckReport, CheckResult, Summary};

use std::path::Path;

use crate::catalog::{Catalog, CheckItem, PathKind};
use crate::probe::{PathProbe, Probe};

/// Check a single item relative to `root`.
///
/// `File` entries pass on plain existence; `Directory` entries need a
/// directory.
pub fn check_path<P>(probe: &P, root: &Path, item: &CheckItem, kind: PathKind) -> CheckResult
where
    P: PathProbe + ?Sized,
{
    let found = probe.probe(&root.join(&item.path));

    let outcome = match (kind, found) {
        (_, Probe::Missing) => CheckOutcome::Missing,
        (_, Probe::Inaccessible(reason)) => CheckOutcome::Inaccessible(reason),
        (PathKind::Directory, Probe::File) => CheckOutcome::WrongKind,
        (PathKind::File, _) | (PathKind::Directory, Probe::Directory) => CheckOutcome::Present,
    };

    tracing::debug!(path = %item.path, %kind, ?outcome, "checked");

    CheckResult {
        path: item.path.clone(),
        label: item.label.clone(),
        kind,
        outcome,
    }
}

/// Check every item of every category, in catalog order.
pub fn run_all_checks<P>(catalog: &Catalog, probe: &P, root: &Path) -> CheckReport
where
    P: PathProbe + ?Sized,
{
    let categories = catalog
        .categories
        .iter()
        .map(|category| CategoryReport {
            name: category.name.clone(),
            icon: category.icon.clone(),
            results: category
                .items
                .iter()
                .map(|item| check_path(probe, root, item, item.kind_or(category.kind)))
                .collect(),
        })
        .collect();

    CheckReport {
        title: catalog.title.clone(),
        categories,
    }
}
