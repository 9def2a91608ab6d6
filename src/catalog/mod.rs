//! Catalog loading, parsing, and validation.
//!
//! A catalog is the list of paths a project is expected to contain:
//! - Schema definitions in [`schema`]
//! - Built-in catalogs in [`builtin`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use layoutcheck::catalog::{parse_catalog, validate, PathKind};
//! use std::path::Path;
//!
//! let yaml = r#"
//! categories:
//!   - name: Wrapper
//!     kind: directory
//!     items:
//!       - path: gradle/wrapper
//!         label: Gradle wrapper directory
//! "#;
//!
//! let catalog = parse_catalog(yaml, Path::new("inline.yml")).unwrap();
//! validate(&catalog).unwrap();
//! assert_eq!(catalog.categories[0].kind, PathKind::Directory);
//! ```

pub mod builtin;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builtin::{has_preset, load_preset, preset_names, DEFAULT_PRESET};
pub use loader::{
    load_catalog_file, parse_catalog, resolve_catalog, CatalogSource, PROJECT_CATALOG_FILE,
};
pub use schema::{Catalog, CheckCategory, CheckItem, PathKind, DEFAULT_TITLE};
pub use validator::{validate, validate_catalog, ValidationError};
