//! Catalog schema definitions.
//!
//! These types map directly to the YAML catalog format. A catalog is an
//! ordered list of categories; each category is an ordered list of paths
//! that must exist relative to the project root.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Title used when a catalog does not set one.
pub const DEFAULT_TITLE: &str = "Project structure check";

/// What kind of filesystem object an entry expects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Anything at the path passes.
    #[default]
    File,
    /// The path must be a directory.
    Directory,
}

impl PathKind {
    /// Noun used in human output ("file does not exist").
    pub fn noun(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

/// A single expected path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckItem {
    /// Path relative to the project root.
    pub path: String,

    /// Human-readable description shown next to the path.
    pub label: String,

    /// Overrides the category's kind for this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PathKind>,
}

impl CheckItem {
    /// Create an item that inherits its category's kind.
    pub fn new(path: &str, label: &str) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            kind: None,
        }
    }

    /// Set an explicit kind.
    pub fn with_kind(mut self, kind: PathKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// The kind to check, falling back to the category default.
    pub fn kind_or(&self, default: PathKind) -> PathKind {
        self.kind.unwrap_or(default)
    }
}

/// A named, ordered group of expected paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckCategory {
    /// Category name, printed as the section header.
    pub name: String,

    /// Optional icon printed before the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Default kind for items in this category.
    #[serde(default)]
    pub kind: PathKind,

    /// Expected paths, checked in this order.
    #[serde(default)]
    pub items: Vec<CheckItem>,
}

impl CheckCategory {
    /// Create an empty category.
    pub fn new(name: &str, kind: PathKind) -> Self {
        Self {
            name: name.to_string(),
            icon: None,
            kind,
            items: Vec::new(),
        }
    }

    /// Set the header icon.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Append an item.
    pub fn with_item(mut self, item: CheckItem) -> Self {
        self.items.push(item);
        self
    }
}

/// The full set of expected paths for one project layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Title printed at the top of a run.
    #[serde(default = "default_title")]
    pub title: String,

    /// Categories, checked in this order.
    #[serde(default)]
    pub categories: Vec<CheckCategory>,

    /// Guidance printed when every check passes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            title: default_title(),
            categories: Vec::new(),
            next_steps: Vec::new(),
        }
    }
}

impl Catalog {
    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
