//! Report command handler

use degree_audit::config::Config;
use degree_audit::core::planner::parse_plan_toml;
use degree_audit::core::progress::compute;
use degree_audit::core::progress_export::ProgressSummary;
use degree_audit::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use degree_audit::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command for a single plan file.
///
/// # Arguments
/// * `input_file` - Path to the plan TOML file
/// * `output` - Optional output path; defaults to the input name with the format's extension
/// * `format` - Report format name (markdown/md or html)
/// * `config` - Configuration (unused for explicit outputs, supplies nothing else here)
pub fn run(input_file: &Path, output: Option<&Path>, format: &str, config: &Config) {
    match generate(input_file, output, format, config) {
        Ok(report_path) => println!("✓ Report generated: {}", report_path.display()),
        Err(e) => eprintln!("{e}"),
    }
}

/// Generate a report into the given reports directory, deriving the file name
/// from the input file. Used by the audit pipeline when a report format is
/// requested for several plans at once.
///
/// # Errors
/// Returns a display-ready message if parsing, rendering, or writing fails.
pub fn generate(
    input_file: &Path,
    output: Option<&Path>,
    format: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format: ReportFormat = format
        .parse()
        .map_err(|e| format!("✗ {e} (expected markdown or html)"))?;

    let input = parse_plan_toml(input_file).map_err(|e| {
        error!("Failed to load plan {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    let report = compute(&input.degree, &input.terms, &input.transfer);
    let summary = ProgressSummary::from_report(&report);
    let ctx = ReportContext::new(&input.plan_name, &input.degree, &report, &summary);

    let output_path = output.map_or_else(
        || default_report_path(input_file, format, config),
        Path::to_path_buf,
    );

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    generator
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!("Report written to {}", output_path.display());
    Ok(output_path)
}

/// Default report path: the configured reports directory (falling back to the
/// input's directory when unset) plus the input stem and format extension.
fn default_report_path(input_file: &Path, format: ReportFormat, config: &Config) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map_or_else(|| "plan".to_string(), |s| s.to_string_lossy().to_string());
    let file_name = format!("{stem}.{}", format.extension());

    if config.paths.reports_dir.is_empty() {
        input_file.with_file_name(file_name)
    } else {
        PathBuf::from(&config.paths.reports_dir).join(file_name)
    }
}
