//! Check command implementation.
//!
//! The `layoutcheck check` command (also the default) checks every
//! cataloged path and exits 0 only when all of them exist.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checker::{run_all_checks, CategoryReport, CheckReport, Summary};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::probe::{FsProbe, PathProbe};
use crate::ui::{render_report, UserInterface};

use super::dispatcher::{CatalogSelection, Command, CommandResult, EXIT_CATALOG, EXIT_MISSING};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    catalog: CatalogSelection,
    args: CheckArgs,
}

/// Shape of `--json` output.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    passed: bool,
    catalog: String,
    title: &'a str,
    summary: Summary,
    categories: &'a [CategoryReport],
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, catalog: CatalogSelection, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            catalog,
            args,
        }
    }

    /// Run against an arbitrary probe.
    pub fn execute_with(
        &self,
        probe: &dyn PathProbe,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let Some((source, catalog)) = self.catalog.resolve_or_report(&self.project_root, ui)
        else {
            return Ok(CommandResult::failure(EXIT_CATALOG));
        };

        let report = run_all_checks(&catalog, probe, &self.project_root);
        let summary = report.summary();
        tracing::debug!(
            passed = summary.passed,
            failed = summary.failed,
            "Checked {} paths under {}",
            summary.total,
            self.project_root.display()
        );

        if self.args.json {
            self.print_json(&report, &source.to_string(), ui)?;
        } else {
            if ui.output_mode().shows_details() {
                ui.message(&format!("Catalog: {}", source));
                ui.message(&format!("Project: {}", self.project_root.display()));
            }
            render_report(&report, &catalog.next_steps, ui);
        }

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_MISSING))
        }
    }

    fn print_json(
        &self,
        report: &CheckReport,
        source: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let output = JsonReport {
            passed: report.passed(),
            catalog: source.to_string(),
            title: &report.title,
            summary: report.summary(),
            categories: &report.categories,
        };
        let json = serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?;
        ui.message(&json);
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&FsProbe, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_preset, DEFAULT_PRESET, PROJECT_CATALOG_FILE};
    use crate::probe::FakeProbe;
    use crate::ui::{MockUI, OutputMode, StatusKind};
    use std::fs;
    use tempfile::TempDir;

    fn command(root: &Path, json: bool) -> CheckCommand {
        CheckCommand::new(root, CatalogSelection::default(), CheckArgs { json })
    }

    fn complete_under(root: &Path) -> FakeProbe {
        FakeProbe::complete_under(&load_preset(DEFAULT_PRESET).unwrap(), root)
    }

    #[test]
    fn all_present_exits_zero() {
        let root = Path::new("/project");
        let mut ui = MockUI::new();

        let result = command(root, false)
            .execute_with(&complete_under(root), &mut ui)
            .unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.count(StatusKind::Complete), 1);
    }

    #[test]
    fn missing_path_exits_one() {
        let root = Path::new("/project");
        let probe = complete_under(root).without(root.join("settings.gradle"));
        let mut ui = MockUI::new();

        let result = command(root, false).execute_with(&probe, &mut ui).unwrap();
        assert_eq!(result.exit_code, EXIT_MISSING);
        assert_eq!(ui.count(StatusKind::Failed), 1);
    }

    #[test]
    fn invalid_project_catalog_exits_two() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CATALOG_FILE), "categories: [").unwrap();
        let mut ui = MockUI::new();

        let result = command(temp.path(), false)
            .execute_with(&FakeProbe::new(), &mut ui)
            .unwrap();
        assert_eq!(result.exit_code, EXIT_CATALOG);
        assert!(ui.errors()[0].contains("Failed to parse catalog"));
    }

    #[test]
    fn json_output_is_structured() {
        let root = Path::new("/project");
        let probe = complete_under(root).without(root.join("README.md"));
        let mut ui = MockUI::new();

        let result = command(root, true).execute_with(&probe, &mut ui).unwrap();
        assert_eq!(result.exit_code, EXIT_MISSING);
        assert!(ui.sections().is_empty());

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["summary"]["total"], 27);
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["catalog"], "built-in preset 'android-tv-player'");
        assert_eq!(value["categories"][1]["results"][4]["path"], "README.md");
        assert_eq!(
            value["categories"][1]["results"][4]["outcome"]["status"],
            "missing"
        );
    }

    #[test]
    fn verbose_mode_names_catalog_source() {
        let root = Path::new("/project");
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        command(root, false)
            .execute_with(&complete_under(root), &mut ui)
            .unwrap();
        assert!(ui.has_message("Catalog: built-in preset 'android-tv-player'"));
    }

    #[test]
    fn checks_real_filesystem() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PROJECT_CATALOG_FILE),
            r#"
categories:
  - name: Root files
    items:
      - path: build.gradle
        label: Root build file
"#,
        )
        .unwrap();
        fs::write(temp.path().join("build.gradle"), "").unwrap();
        let mut ui = MockUI::new();

        let result = command(temp.path(), false).execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(
            ui.status_messages(StatusKind::Success),
            vec!["Root build file: build.gradle"]
        );
    }
}
