//! Structured results of a check run.

use serde::Serialize;

use crate::catalog::PathKind;

/// Result of checking one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The path exists with the expected kind.
    Present,
    /// Nothing exists at the path.
    Missing,
    /// Something exists, but not a directory where one is required.
    WrongKind,
    /// The lookup failed for a reason other than not-found.
    Inaccessible(String),
}

impl CheckOutcome {
    /// Only `Present` passes.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// One catalog item and what was found for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub path: String,
    pub label: String,
    pub kind: PathKind,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    /// Whether this item passed.
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }

    /// Fixed suffix for a failing line, e.g. "file does not exist".
    pub fn failure_suffix(&self) -> String {
        format!("{} does not exist", self.kind.noun())
    }

    /// Extra explanation for failures that are not a plain miss.
    pub fn detail(&self) -> Option<String> {
        match &self.outcome {
            CheckOutcome::WrongKind => {
                Some(format!("found a non-{} at this path", self.kind.noun()))
            }
            CheckOutcome::Inaccessible(reason) => Some(format!("could not inspect: {}", reason)),
            CheckOutcome::Present | CheckOutcome::Missing => None,
        }
    }
}

/// Results for one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub results: Vec<CheckResult>,
}

impl CategoryReport {
    /// Header text, with the icon when one is set.
    pub fn header(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.name),
            None => self.name.clone(),
        }
    }

    /// Whether every item in this category passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(CheckResult::passed)
    }

    /// Failing items in this category.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}

/// Counts over a whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Results for a whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub title: String,
    pub categories: Vec<CategoryReport>,
}

impl CheckReport {
    /// Aggregate result: true iff every item passed. Vacuously true when
    /// there are no items.
    pub fn passed(&self) -> bool {
        self.categories.iter().all(CategoryReport::passed)
    }

    /// Every result across all categories, in order.
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.categories.iter().flat_map(|c| c.results.iter())
    }

    /// Every failing result across all categories, in order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results().filter(|r| !r.passed())
    }

    /// Pass/fail counts.
    pub fn summary(&self) -> Summary {
        let total = self.results().count();
        let failed = self.failures().count();
        Summary {
            total,
            passed: total - failed,
            failed,
        }
    }
}
