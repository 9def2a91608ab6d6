//! Catalog discovery and loading.
//!
//! A run checks exactly one catalog, chosen in this order:
//! 1. An explicit `--catalog` file
//! 2. The project catalog (`.layoutcheck.yml` in the project root)
//! 3. A built-in preset (`--preset`, default `android-tv-player`)

use crate::catalog::builtin;
use crate::catalog::schema::Catalog;
use crate::catalog::validator::validate;
use crate::error::{LayoutError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a project-local catalog.
pub const PROJECT_CATALOG_FILE: &str = ".layoutcheck.yml";

/// Where the catalog for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Explicitly requested file.
    File(PathBuf),
    /// Catalog found in the project root.
    Project(PathBuf),
    /// Built-in catalog embedded in the binary.
    Preset(String),
}

impl CatalogSource {
    /// Pick the catalog source for a project.
    pub fn discover(project_root: &Path, explicit: Option<&Path>, preset: &str) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }

        let project = project_root.join(PROJECT_CATALOG_FILE);
        if project.is_file() {
            return Self::Project(project);
        }

        Self::Preset(preset.to_string())
    }

    /// Load the catalog this source points at, without validating it.
    pub fn load(&self) -> Result<Catalog> {
        match self {
            Self::File(path) | Self::Project(path) => load_catalog_file(path),
            Self::Preset(name) => builtin::load_preset(name),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) | Self::Project(path) => write!(f, "{}", path.display()),
            Self::Preset(name) => write!(f, "built-in preset '{}'", name),
        }
    }
}

/// Load a single catalog file.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParseError` if the YAML is invalid.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LayoutError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LayoutError::Io(e)
        }
    })?;

    parse_catalog(&content, path)
}

/// Parse YAML content into a Catalog.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_catalog(content: &str, source_path: &Path) -> Result<Catalog> {
    serde_yaml::from_str(content).map_err(|e| LayoutError::CatalogParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Discover, load and validate the catalog for a project.
pub fn resolve_catalog(
    project_root: &Path,
    explicit: Option<&Path>,
    preset: &str,
) -> Result<(CatalogSource, Catalog)> {
    let source = CatalogSource::discover(project_root, explicit, preset);
    tracing::debug!("Loading catalog from {}", source);

    let catalog = source.load()?;
    validate(&catalog)?;

    tracing::debug!(
        "Catalog '{}' has {} categories, {} items",
        catalog.title,
        catalog.categories.len(),
        catalog.item_count()
    );

    Ok((source, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::DEFAULT_PRESET;
    use tempfile::TempDir;

    const SMALL_CATALOG: &str = r#"
title: Small
categories:
  - name: Root files
    items:
      - path: build.gradle
        label: Build file
"#;

    #[test]
    fn discover_prefers_explicit_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CATALOG_FILE), SMALL_CATALOG).unwrap();

        let explicit = temp.path().join("other.yml");
        let source = CatalogSource::discover(temp.path(), Some(&explicit), DEFAULT_PRESET);
        assert_eq!(source, CatalogSource::File(explicit));
    }

    #[test]
    fn discover_finds_project_catalog() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CATALOG_FILE), SMALL_CATALOG).unwrap();

        let source = CatalogSource::discover(temp.path(), None, DEFAULT_PRESET);
        assert!(matches!(source, CatalogSource::Project(_)));
    }

    #[test]
    fn discover_falls_back_to_preset() {
        let temp = TempDir::new().unwrap();
        let source = CatalogSource::discover(temp.path(), None, DEFAULT_PRESET);
        assert_eq!(source, CatalogSource::Preset(DEFAULT_PRESET.to_string()));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_catalog_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, LayoutError::CatalogNotFound { .. }));
    }

    #[test]
    fn parse_invalid_yaml_reports_path() {
        let err = parse_catalog("categories: [", Path::new("bad.yml")).unwrap_err();
        assert!(matches!(err, LayoutError::CatalogParseError { .. }));
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn resolve_loads_project_catalog() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CATALOG_FILE), SMALL_CATALOG).unwrap();

        let (source, catalog) = resolve_catalog(temp.path(), None, DEFAULT_PRESET).unwrap();
        assert!(matches!(source, CatalogSource::Project(_)));
        assert_eq!(catalog.title, "Small");
        assert_eq!(catalog.item_count(), 1);
    }

    #[test]
    fn resolve_rejects_invalid_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(
            &path,
            r#"
categories:
  - name: Root
    items:
      - path: /etc/hosts
        label: Hosts
"#,
        )
        .unwrap();

        let err = resolve_catalog(temp.path(), Some(&path), DEFAULT_PRESET).unwrap_err();
        assert!(matches!(err, LayoutError::CatalogValidationError { .. }));
    }

    #[test]
    fn source_display() {
        assert_eq!(
            CatalogSource::Preset("android-tv-player".to_string()).to_string(),
            "built-in preset 'android-tv-player'"
        );
        assert_eq!(
            CatalogSource::File(PathBuf::from("catalog.yml")).to_string(),
            "catalog.yml"
        );
    }
}
