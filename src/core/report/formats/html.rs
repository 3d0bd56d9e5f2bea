//! HTML report generator
//!
//! Generates self-contained audit reports with embedded CSS. Single-course
//! requirements render as checkbox rows, credit buckets as bars, and the
//! breadth requirement as a category checklist.

use crate::core::progress::RequirementStatus;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{plan_name}}", &escape(ctx.plan_name));
        output = output.replace("{{degree_name}}", &escape(&ctx.degree.name));
        output = output.replace("{{percent}}", &ctx.report.percent.to_string());
        output = output.replace(
            "{{completed_credits}}",
            &ctx.report.completed_credits.to_string(),
        );
        output = output.replace("{{total_credits}}", &ctx.report.total_credits.to_string());
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
                "<div class=\"note\">{} requirement(s) could not be classified and count all scheduled credits.</div>\n",
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
            let row_class = if status.is_completed {
                " class=\"done\""
            } else {
                ""
            };
            let state = if status.is_completed { "✓" } else { "✗" };
            let _ = writeln!(
                rows,
                "  <tr{row_class}><td>{}</td><td>{}</td><td>{state}</td><td>{}</td></tr>",
                escape(&status.name),
                status.kind,
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

            let _ = writeln!(section, "<h2>{}</h2>", escape(&status.name));
            let _ = writeln!(
                section,
                "<p>{} of {} categories covered (need {}).</p>",
                breadth.satisfied,
                breadth.categories.len(),
                breadth.threshold
            );
            let _ = writeln!(section, "<ul class=\"checklist\">");
            for category in &breadth.categories {
                let mark = if category.satisfied { "☑" } else { "☐" };
                let _ = writeln!(section, "  <li>{mark} {}</li>", escape(&category.label));
            }
            let _ = writeln!(section, "</ul>");
        }

        section
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

/// Render the progress cell for one requirement row: a checkbox label for
/// single-course requirements, an inline bar for credit buckets.
fn progress_cell(status: &RequirementStatus) -> String {
    if status.is_single_course {
        return format!(
            "{} / {} credits",
            status.completed_credits, status.required_credits
        );
    }
    if status.breadth.is_some() {
        return format!(
            "{} / {} categories",
            status.completed_credits, status.required_credits
        );
    }

    let required = status.required_credits.max(1);
    let fill = (u64::from(status.completed_credits.min(required)) * 100 / u64::from(required))
        .to_string();
    format!(
        "<div class=\"rowbar\"><div class=\"rowbar-fill\" style=\"width:{fill}%\"></div></div> {} / {} credits",
        status.completed_credits, status.required_credits
    )
}

/// Minimal HTML escaping for text nodes
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
