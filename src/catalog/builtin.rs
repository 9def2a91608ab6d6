//! Built-in catalogs embedded at compile time.

use crate::catalog::schema::Catalog;
use crate::error::{LayoutError, Result};
use include_dir::{include_dir, Dir};

/// Embedded catalogs directory.
static CATALOGS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/catalogs");

/// Preset used when no catalog is given.
pub const DEFAULT_PRESET: &str = "android-tv-player";

/// Names of all built-in catalogs, sorted.
pub fn preset_names() -> Vec<String> {
    let mut names: Vec<String> = CATALOGS_DIR
        .files()
        .filter(|f| {
            f.path()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
        })
        .filter_map(|f| f.path().file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Check if a preset exists.
pub fn has_preset(name: &str) -> bool {
    preset_names().iter().any(|n| n == name)
}

/// Load a built-in catalog by name.
pub fn load_preset(name: &str) -> Result<Catalog> {
    let file = CATALOGS_DIR
        .get_file(format!("{}.yml", name))
        .or_else(|| CATALOGS_DIR.get_file(format!("{}.yaml", name)))
        .ok_or_else(|| LayoutError::UnknownPreset {
            name: name.to_string(),
        })?;

    let content = file
        .contents_utf8()
        .ok_or_else(|| LayoutError::CatalogParseError {
            path: file.path().to_path_buf(),
            message: "Invalid UTF-8".to_string(),
        })?;

    serde_yaml::from_str(content).map_err(|e| LayoutError::CatalogParseError {
        path: file.path().to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::PathKind;
    use crate::catalog::validator::validate_catalog;

    #[test]
    fn default_preset_is_listed() {
        assert!(has_preset(DEFAULT_PRESET));
        assert!(!has_preset("nonexistent"));
    }

    #[test]
    fn default_preset_has_27_entries() {
        let catalog = load_preset(DEFAULT_PRESET).unwrap();
        assert_eq!(catalog.item_count(), 27);
    }

    #[test]
    fn default_preset_category_sizes_in_order() {
        let catalog = load_preset(DEFAULT_PRESET).unwrap();
        let sizes: Vec<usize> = catalog.categories.iter().map(|c| c.items.len()).collect();
        assert_eq!(sizes, vec![6, 5, 3, 4, 9]);
    }

    #[test]
    fn default_preset_directories_come_first() {
        let catalog = load_preset(DEFAULT_PRESET).unwrap();
        let first = &catalog.categories[0];
        assert_eq!(first.kind, PathKind::Directory);
        assert!(first.items.iter().all(|i| i.kind.is_none()));
        assert!(catalog.categories[1..]
            .iter()
            .all(|c| c.kind == PathKind::File));
    }

    #[test]
    fn default_preset_has_four_next_steps() {
        let catalog = load_preset(DEFAULT_PRESET).unwrap();
        assert_eq!(catalog.next_steps.len(), 4);
        assert!(catalog.next_steps[0].contains("Android Studio"));
    }

    #[test]
    fn default_preset_is_valid() {
        let catalog = load_preset(DEFAULT_PRESET).unwrap();
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn unknown_preset_errors() {
        let err = load_preset("ios-app").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownPreset { .. }));
    }
}
