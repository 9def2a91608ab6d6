//! Catalog command implementation.
//!
//! The `layoutcheck catalog` command prints the catalog a check would use,
//! so a built-in preset can be exported, edited and versioned as
//! `.layoutcheck.yml`.

use std::path::{Path, PathBuf};

use crate::catalog::{preset_names, Catalog};
use crate::cli::args::CatalogArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{CatalogSelection, Command, CommandResult, EXIT_CATALOG};

/// The catalog command implementation.
pub struct CatalogCommand {
    project_root: PathBuf,
    catalog: CatalogSelection,
    args: CatalogArgs,
}

impl CatalogCommand {
    /// Create a new catalog command.
    pub fn new(project_root: &Path, catalog: CatalogSelection, args: CatalogArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            catalog,
            args,
        }
    }

    fn render(&self, catalog: &Catalog) -> Result<String> {
        let text = if self.args.json {
            serde_json::to_string_pretty(catalog).map_err(anyhow::Error::from)?
        } else {
            serde_yaml::to_string(catalog).map_err(anyhow::Error::from)?
        };
        Ok(text)
    }
}

impl Command for CatalogCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.list {
            for name in preset_names() {
                ui.message(&name);
            }
            return Ok(CommandResult::success());
        }

        let Some((source, catalog)) = self.catalog.resolve_or_report(&self.project_root, ui)
        else {
            return Ok(CommandResult::failure(EXIT_CATALOG));
        };

        tracing::debug!("Printing catalog from {}", source);
        ui.message(self.render(&catalog)?.trim_end());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_preset, parse_catalog, DEFAULT_PRESET};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(args: CatalogArgs) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        let cmd = CatalogCommand::new(temp.path(), CatalogSelection::default(), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn lists_presets() {
        let (result, ui) = run(CatalogArgs {
            list: true,
            ..Default::default()
        });
        assert!(result.success);
        assert!(ui.has_message(DEFAULT_PRESET));
    }

    #[test]
    fn yaml_output_round_trips() {
        let (result, ui) = run(CatalogArgs::default());
        assert!(result.success);

        let printed = parse_catalog(&ui.messages()[0], Path::new("stdout")).unwrap();
        assert_eq!(printed, load_preset(DEFAULT_PRESET).unwrap());
    }

    #[test]
    fn json_output_has_categories() {
        let (result, ui) = run(CatalogArgs {
            json: true,
            ..Default::default()
        });
        assert!(result.success);

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["categories"].as_array().unwrap().len(), 5);
        assert_eq!(value["categories"][0]["kind"], "directory");
    }

    #[test]
    fn missing_catalog_file_exits_two() {
        let temp = TempDir::new().unwrap();
        let selection = CatalogSelection {
            path: Some(temp.path().join("absent.yml")),
            ..Default::default()
        };
        let cmd = CatalogCommand::new(temp.path(), selection, CatalogArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, EXIT_CATALOG);
        assert!(ui.errors()[0].contains("Catalog not found"));
    }
}
