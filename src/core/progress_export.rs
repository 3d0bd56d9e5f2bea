//! Export progress reports to CSV

use crate::core::progress::ProgressReport;
use std::error::Error;
use std::path::Path;

/// Trait for exporting a progress report in different formats
pub trait ProgressExporter {
    /// Export a progress report for a plan
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(
        &self,
        plan_name: &str,
        degree_name: &str,
        report: &ProgressReport,
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>>;
}

/// Summary statistics for a progress report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Total number of requirements
    pub requirements_total: usize,
    /// Requirements currently satisfied
    pub requirements_completed: usize,
    /// Requirements evaluated through the catch-all path
    pub requirements_unclassified: usize,
    /// Credits still needed to reach the degree total (0 when met or exceeded)
    pub credits_remaining: u32,
}

impl ProgressSummary {
    /// Compute summary statistics from a progress report
    #[must_use]
    pub fn from_report(report: &ProgressReport) -> Self {
        let requirements_completed = report
            .requirements
            .iter()
            .filter(|r| r.is_completed)
            .count();
        let requirements_unclassified = report
            .requirements
            .iter()
            .filter(|r| r.unclassified)
            .count();

        Self {
            requirements_total: report.requirements.len(),
            requirements_completed,
            requirements_unclassified,
            credits_remaining: report
                .total_credits
                .saturating_sub(report.completed_credits),
        }
    }
}

/// CSV exporter for progress reports
pub struct CsvExporter;

impl ProgressExporter for CsvExporter {
    fn export(
        &self,
        plan_name: &str,
        degree_name: &str,
        report: &ProgressReport,
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let summary = ProgressSummary::from_report(report);
        export_progress_csv(plan_name, degree_name, report, &summary, output_path)
    }
}

/// Export a progress report to CSV format with summary statistics
///
/// The file starts with a summary header section (one item per row), then a
/// table with one row per requirement in report order.
///
/// # Errors
/// Returns an error if file writing fails
pub fn export_progress_csv(
    plan_name: &str,
    degree_name: &str,
    report: &ProgressReport,
    summary: &ProgressSummary,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    use std::fs::File;
    use std::io::Write;

    let mut file = File::create(output_path)?;

    // Header section with summary statistics - one item per row
    writeln!(file, "Plan,{plan_name}")?;
    writeln!(file, "Degree,{degree_name}")?;
    writeln!(file, "Total Credits,{}", report.total_credits)?;
    writeln!(file, "Completed Credits,{}", report.completed_credits)?;
    writeln!(file, "Overall Progress,{}%", report.percent)?;
    writeln!(
        file,
        "Requirements Completed,{} of {}",
        summary.requirements_completed, summary.requirements_total
    )?;
    if summary.requirements_unclassified > 0 {
        writeln!(
            file,
            "Unclassified Requirements,{}",
            summary.requirements_unclassified
        )?;
    }
    writeln!(file)?;

    // Requirement table
    writeln!(
        file,
        "Requirement,Name,Kind,Type,Completed,Credits Completed,Credits Required"
    )?;
    for status in &report.requirements {
        let req_type = if status.is_single_course {
            "single-course"
        } else if status.unclassified {
            "unclassified"
        } else {
            "credit-accumulation"
        };
        writeln!(
            file,
            "{},\"{}\",{},{},{},{},{}",
            status.id,
            status.name,
            status.kind,
            req_type,
            if status.is_completed { "yes" } else { "no" },
            status.completed_credits,
            status.required_credits
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Course, CreditRule, Degree, DegreeRequirement, RequirementKind, ScheduledTerm, TermSeason,
        TransferCredits,
    };
    use crate::core::progress::compute;

    fn sample_report() -> ProgressReport {
        let mut degree = Degree::new("d".to_string(), "Degree".to_string(), 120);
        degree.add_requirement(
            DegreeRequirement::new(
                "intro".to_string(),
                "Introductory Programming".to_string(),
                RequirementKind::Required,
                4,
            )
            .with_courses(&["CPSC 110"]),
        );
        degree.add_requirement(
            DegreeRequirement::new(
                "upper-cpsc".to_string(),
                "9 credits of CPSC 300 or above".to_string(),
                RequirementKind::Elective,
                9,
            )
            .with_rule(CreditRule::SubjectAtLevel {
                subject: "CPSC".to_string(),
                min_level: 300,
            }),
        );
        degree.add_requirement(DegreeRequirement::new(
            "mystery".to_string(),
            "Unrecognized requirement".to_string(),
            RequirementKind::Elective,
            12,
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

        compute(&degree, &[term], &TransferCredits::new())
    }

    #[test]
    fn summary_counts_completed_and_unclassified() {
        let report = sample_report();
        let summary = ProgressSummary::from_report(&report);

        assert_eq!(summary.requirements_total, 3);
        assert_eq!(summary.requirements_completed, 1);
        assert_eq!(summary.requirements_unclassified, 1);
        assert_eq!(summary.credits_remaining, 116);
    }

    #[test]
    fn credits_remaining_saturates_at_zero() {
        let report = ProgressReport {
            total_credits: 10,
            completed_credits: 14,
            percent: 100,
            requirements: Vec::new(),
        };
        let summary = ProgressSummary::from_report(&report);
        assert_eq!(summary.credits_remaining, 0);
    }

    #[test]
    fn csv_export_writes_summary_and_rows() {
        let report = sample_report();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("progress.csv");

        CsvExporter
            .export("Test Plan", "BSc Major in Computer Science", &report, &path)
            .expect("export");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.starts_with("Plan,Test Plan"));
        assert!(content.contains("Overall Progress,3%"));
        assert!(content.contains("intro,\"Introductory Programming\",required,single-course,yes,4,4"));
        assert!(content.contains("mystery,\"Unrecognized requirement\",elective,unclassified,no,4,12"));
    }
}
