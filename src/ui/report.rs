//! Human-readable rendering of a check report.

use crate::checker::CheckReport;

use super::{StatusKind, UserInterface};

/// Render a report: title, category headers, one line per item, then the
/// separator and the success or failure banner.
///
/// Quiet mode keeps only failing items and the banner. Verbose mode adds a
/// detail line under failures that are not a plain miss.
pub fn render_report(report: &CheckReport, next_steps: &[String], ui: &mut dyn UserInterface) {
    let mode = ui.output_mode();

    if mode.shows_status() {
        ui.show_header(&report.title);
        ui.separator();
    }

    for category in &report.categories {
        if mode.shows_status() {
            ui.show_section(&category.header());
        }

        for result in &category.results {
            let line = format!("{}: {}", result.label, result.path);
            if result.passed() {
                if mode.shows_status() {
                    ui.status(StatusKind::Success, &line);
                }
                continue;
            }

            ui.status(
                StatusKind::Failed,
                &format!("{} - {}", line, result.failure_suffix()),
            );
            if mode.shows_details() {
                if let Some(detail) = result.detail() {
                    ui.message(&format!("    {}", detail));
                }
            }
        }
    }

    if mode.shows_status() {
        ui.message("");
        ui.separator();
    }

    let summary = report.summary();
    if report.passed() {
        ui.status(
            StatusKind::Complete,
            &format!(
                "Project structure check passed! All {} expected paths exist.",
                summary.total
            ),
        );

        if mode.shows_status() && !next_steps.is_empty() {
            ui.message("");
            ui.message("Next steps:");
            for (idx, step) in next_steps.iter().enumerate() {
                ui.message(&format!("{}. {}", idx + 1, step));
            }
        }
    } else {
        ui.status(
            StatusKind::Warning,
            &format!(
                "Project structure check failed! {} of {} expected paths are missing.",
                summary.failed, summary.total
            ),
        );
    }
}
