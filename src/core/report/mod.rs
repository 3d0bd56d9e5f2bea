//! Report generation for progress audits
//!
//! Renders a computed progress report in Markdown or HTML: an overall
//! progress bar, a per-requirement table (checkbox style for single-course
//! requirements, bar style for credit buckets), and a category checklist for
//! the breadth requirement.

pub mod formats;

use crate::core::models::Degree;
use crate::core::progress::ProgressReport;
use crate::core::progress_export::ProgressSummary;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything needed to render an audit report, providing a
/// single source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Plan display name
    pub plan_name: &'a str,
    /// Degree being audited
    pub degree: &'a Degree,
    /// Computed progress report
    pub report: &'a ProgressReport,
    /// Summary statistics
    pub summary: &'a ProgressSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        plan_name: &'a str,
        degree: &'a Degree,
        report: &'a ProgressReport,
        summary: &'a ProgressSummary,
    ) -> Self {
        Self {
            plan_name,
            degree,
            report,
            summary,
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
