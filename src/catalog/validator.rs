//! Catalog validation rules.
//!
//! This module validates a catalog before any path is checked:
//! - Category names must be non-empty and unique
//! - Item labels must be non-empty
//! - Item paths must name something below the project root
//! - A path may appear only once across the whole catalog

use crate::catalog::schema::Catalog;
use crate::error::{LayoutError, Result};
use std::collections::HashSet;
use std::path::{Component, Path};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Category name if the error is category-specific
    pub category: Option<String>,
    /// Item path if the error is item-specific
    pub path: Option<String>,
}

/// Validate a catalog and return all errors.
///
/// Collects every problem rather than stopping at the first one, so a
/// hand-edited catalog can be fixed in one pass.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_categories(catalog));
    errors.extend(validate_items(catalog));

    errors
}

fn validate_categories(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for category in &catalog.categories {
        if category.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-category-name".to_string(),
                message: "Category name must not be empty".to_string(),
                category: None,
                path: None,
            });
            continue;
        }

        if !seen.insert(category.name.as_str()) {
            errors.push(ValidationError {
                rule: "duplicate-category".to_string(),
                message: format!("Category '{}' is defined more than once", category.name),
                category: Some(category.name.clone()),
                path: None,
            });
        }
    }

    errors
}

fn validate_items(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for category in &catalog.categories {
        for item in &category.items {
            let error = |rule: &str, message: String| ValidationError {
                rule: rule.to_string(),
                message,
                category: Some(category.name.clone()),
                path: Some(item.path.clone()),
            };

            if item.path.trim().is_empty() {
                errors.push(error(
                    "empty-path",
                    format!("Category '{}' has an item with an empty path", category.name),
                ));
                continue;
            }

            if item.label.trim().is_empty() {
                errors.push(error(
                    "empty-label",
                    format!("Item '{}' has an empty label", item.path),
                ));
            }

            let path = Path::new(&item.path);
            if path.is_absolute() || path.has_root() {
                errors.push(error(
                    "absolute-path",
                    format!("Item '{}' must be relative to the project root", item.path),
                ));
                continue;
            }
            if path.components().any(|c| c == Component::ParentDir) {
                errors.push(error(
                    "escaping-path",
                    format!("Item '{}' must not contain '..'", item.path),
                ));
                continue;
            }

            let Some(normalized) = normalize(&item.path) else {
                errors.push(error(
                    "empty-path",
                    format!("Item '{}' does not name anything below the project root", item.path),
                ));
                continue;
            };

            if !seen.insert(normalized) {
                errors.push(error(
                    "duplicate-path",
                    format!("Path '{}' is listed more than once", item.path),
                ));
            }
        }
    }

    errors
}

/// Canonical spelling of a relative path: `/` separators, no `.` segments,
/// no trailing slash. `None` when nothing but `.` segments remain.
fn normalize(path: &str) -> Option<String> {
    let unified = path.replace('\\', "/");
    let segments: Vec<String> = Path::new(&unified)
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Validate and return a single error summarizing all issues.
pub fn validate(catalog: &Catalog) -> Result<()> {
    let errors = validate_catalog(catalog);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LayoutError::CatalogValidationError {
            message: messages.join("; "),
        })
    }
}
