//! Schema command implementation.
//!
//! The `layoutcheck schema` command prints the JSON Schema for catalog
//! files, for editor completion and validation of `.layoutcheck.yml`.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

/// Generate the catalog JSON Schema.
pub fn catalog_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(Catalog)).unwrap_or_default()
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let json = serde_json::to_string_pretty(&catalog_schema()).map_err(anyhow::Error::from)?;
        ui.message(&json);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn schema_describes_catalog() {
        let schema = catalog_schema();
        assert_eq!(schema["title"], "Catalog");
        assert!(schema["properties"]["categories"].is_object());
        assert!(schema["properties"]["next_steps"].is_object());
    }

    #[test]
    fn schema_lists_path_kinds() {
        let text = catalog_schema().to_string();
        assert!(text.contains("\"file\""));
        assert!(text.contains("\"directory\""));
    }

    #[test]
    fn command_prints_json() {
        let mut ui = MockUI::new();
        let result = SchemaCommand.execute(&mut ui).unwrap();
        assert!(result.success);

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert!(value["$schema"].is_string());
    }
}
