//! Markdown report generator
//!
//! Generates audit reports in Markdown format. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::progress::RequirementStatus;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Width of the overall progress bar in characters
const BAR_WIDTH: usize = 20;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{plan_name}}", ctx.plan_name);
        output = output.replace("{{degree_name}}", &ctx.degree.name);
        output = output.replace("{{percent}}", &ctx.report.percent.to_string());
        output = output.replace(
            "{{completed_credits}}",
            &ctx.report.completed_credits.to_string(),
        );
        output = output.replace("{{total_credits}}", &ctx.report.total_credits.to_string());
        output = output.replace("{{progress_bar}}", &progress_bar(ctx.report.percent));

        output = output.replace(
            "{{requirements_completed}}",
            &ctx.summary.requirements_completed.to_string(),
        );
        output = output.replace(
            "{{requirements_total}}",
            &ctx.summary.requirements_total.to_string(),
        );

        let note = if ctx.summary.requirements_unclassified > 0 {
            format!(
                "\n> {} requirement(s) could not be classified and count all scheduled credits.\n",
                ctx.summary.requirements_unclassified
            )
        } else {
            String::new()
        };
        output = output.replace("{{unclassified_note}}", &note);

        output = output.replace("{{requirement_rows}}", &Self::generate_rows(ctx));
        output = output.replace("{{breadth_section}}", &Self::generate_breadth_section(ctx));

        output
    }

    /// Generate the per-requirement table rows
    fn generate_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for status in &ctx.report.requirements {
            let state = if status.is_completed { "✓" } else { "✗" };
            let _ = writeln!(
                rows,
                "| {} | {} | {} | {} |",
                status.name,
                status.kind,
                state,
                progress_cell(status)
            );
        }

        rows
    }

    /// Generate the category checklist for the breadth requirement, if any
    fn generate_breadth_section(ctx: &ReportContext) -> String {
        let mut section = String::new();

        for status in &ctx.report.requirements {
            let Some(breadth) = &status.breadth else {
                continue;
            };

            let _ = writeln!(section, "\n## {}\n", status.name);
            let _ = writeln!(
                section,
                "{} of {} categories covered (need {}).\n",
                breadth.satisfied,
                breadth.categories.len(),
                breadth.threshold
            );
            for category in &breadth.categories {
                let mark = if category.satisfied { "x" } else { " " };
                let _ = writeln!(section, "- [{mark}] {}", category.label);
            }
        }

        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

/// Render a fixed-width text progress bar for a 0–100 percentage
fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// Render the progress cell for one requirement row
fn progress_cell(status: &RequirementStatus) -> String {
    if status.breadth.is_some() {
        format!(
            "{} / {} categories",
            status.completed_credits, status.required_credits
        )
    } else {
        format!(
            "{} / {} credits",
            status.completed_credits, status.required_credits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Course, Degree, DegreeRequirement, RequirementKind, ScheduledTerm, TermSeason,
        TransferCredits,
    };
    use crate::core::progress::compute;
    use crate::core::progress_export::ProgressSummary;

    #[test]
    fn bar_is_empty_at_zero_and_full_at_hundred() {
        assert_eq!(progress_bar(0), "░".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(100), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn renders_plan_and_requirement_rows() {
        let mut degree = Degree::new(
            "bsc-cpsc".to_string(),
            "BSc Major in Computer Science".to_string(),
            120,
        );
        degree.add_requirement(
            DegreeRequirement::new(
                "intro".to_string(),
                "Introductory Programming".to_string(),
                RequirementKind::Required,
                4,
            )
            .with_courses(&["CPSC 110"]),
        );
        degree.add_requirement(DegreeRequirement::new(
            "sci-breadth".to_string(),
            "Science Breadth".to_string(),
            RequirementKind::Breadth,
            0,
        ));

        let mut term = ScheduledTerm::new(
            "2025W1".to_string(),
            "Winter 2025 Term 1".to_string(),
            2025,
            TermSeason::Fall,
        );
        term.add_course(Course::new(
            "CPSC 110".to_string(),
            "Computation".to_string(),
            4,
        ));
        let terms = [term];

        let report = compute(&degree, &terms, &TransferCredits::new());
        let summary = ProgressSummary::from_report(&report);
        let ctx = ReportContext::new("Sample Plan", &degree, &report, &summary);

        let rendered = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(rendered.contains("# Degree Progress: Sample Plan"));
        assert!(rendered.contains("BSc Major in Computer Science"));
        assert!(rendered.contains("| Introductory Programming | required | ✓ | 4 / 4 credits |"));
        assert!(rendered.contains("## Science Breadth"));
        assert!(rendered.contains("- [x] Computer Science"));
        assert!(rendered.contains("- [ ] Physics"));
        assert!(!rendered.contains("{{"));
    }
}
