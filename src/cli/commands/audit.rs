//! Audit command handler

use degree_audit::config::Config;
use degree_audit::core::models::term::duplicate_codes;
use degree_audit::core::planner::parse_plan_toml;
use degree_audit::core::progress::compute;
use degree_audit::core::progress_export::{CsvExporter, ProgressExporter, ProgressSummary};
use degree_audit::{error, info, warn};
use std::path::{Path, PathBuf};

/// Run the audit command for one or more plan files.
///
/// # Arguments
/// * `input_files` - Paths to plan TOML files
/// * `output_files` - Optional output paths; must match inputs 1:1 when provided
/// * `config` - Configuration containing the default output directory
/// * `verbose` - Whether to show per-requirement output
/// * `no_csv` - Skip the CSV export
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    config: &Config,
    verbose: bool,
    no_csv: bool,
) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = audit_single(input_file, output_file, config, verbose, no_csv) {
            error!("Audit failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

fn audit_single(
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
    verbose: bool,
    no_csv: bool,
) -> Result<(), String> {
    let input = parse_plan_toml(input_file).map_err(|e| {
        error!("Failed to load plan {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!("Plan loaded: {}", input_file.display());

    let duplicates = duplicate_codes(&input.terms);
    if !duplicates.is_empty() {
        warn!(
            "Plan '{}' schedules the same course in more than one term: {}",
            input.plan_name,
            duplicates.join(", ")
        );
    }

    let report = compute(&input.degree, &input.terms, &input.transfer);
    let summary = ProgressSummary::from_report(&report);

    println!(
        "✓ {}: {}% ({} of {} credits, {} of {} requirements)",
        input.plan_name,
        report.percent,
        report.completed_credits,
        report.total_credits,
        summary.requirements_completed,
        summary.requirements_total
    );

    if verbose {
        for status in &report.requirements {
            let state = if status.is_completed { "✓" } else { "✗" };
            let tag = if status.unclassified {
                " (unclassified)"
            } else {
                ""
            };
            println!(
                "  {state} {} — {}/{}{tag}",
                status.name, status.completed_credits, status.required_credits
            );
        }
    }

    if summary.requirements_unclassified > 0 {
        warn!(
            "{} requirement(s) in '{}' could not be classified; counting all scheduled credits",
            summary.requirements_unclassified, input.plan_name
        );
    }

    if no_csv {
        return Ok(());
    }

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input_file, config)?,
    };

    CsvExporter
        .export(&input.plan_name, &input.degree.name, &report, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    println!("✓ Progress CSV written to: {}", output_path.display());
    Ok(())
}

/// Build the default CSV output path from the config's reports directory and
/// the input file's stem.
fn default_output_path(input_file: &Path, config: &Config) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .map_or_else(|| "plan".to_string(), |s| s.to_string_lossy().to_string());
    Ok(reports_dir.join(format!("{stem}_progress.csv")))
}
