//! Integration tests for plan file parsing

use degree_audit::core::planner::{parse_plan_str, parse_plan_toml};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_sample_bsc_cpsc_plan() {
    let plan_path = "samples/plans/bsc_cpsc.toml";

    let result = parse_plan_toml(plan_path);
    assert!(
        result.is_ok(),
        "Failed to parse plan TOML: {:?}",
        result.err()
    );

    let input = result.unwrap();

    assert_eq!(input.plan_name, "BSc CPSC sample plan");
    assert_eq!(input.degree.id, "bsc-cpsc");
    assert_eq!(input.degree.total_credits, 120);

    // 3 faculty-level + 14 program-level requirements, faculty first
    assert_eq!(input.degree.requirements.len(), 17);
    assert_eq!(input.degree.requirements[0].id, "communication");
    assert_eq!(input.degree.requirements[1].id, "sci-breadth");
    assert_eq!(input.degree.requirements[3].id, "cpsc-110");

    // Four scheduled terms
    assert_eq!(input.terms.len(), 4);
    assert_eq!(input.terms[0].id, "2024W1");
    assert!(input.terms[0].contains_code("CPSC 110"));
    assert_eq!(input.terms[0].total_credits(), 14);

    // Transfer flag survives the load
    assert!(input.transfer.contains("communication"));
}

#[test]
fn test_parse_nonexistent_file() {
    let result = parse_plan_toml("samples/plans/nonexistent.toml");
    assert!(result.is_err(), "Should fail for nonexistent file");
}

#[test]
fn test_parse_plan_from_temp_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plan_path = temp_dir.path().join("tiny.toml");

    fs::write(
        &plan_path,
        r#"
name = "Tiny Plan"

[degree]
id = "mini"
name = "Mini Degree"
total_credits = 30

[[degree.requirements]]
id = "intro"
name = "Intro Course"
kind = "required"
credits = 4
courses = ["CPSC 110"]
"#,
    )
    .expect("write plan");

    let input = parse_plan_toml(&plan_path).expect("parse plan");
    assert_eq!(input.plan_name, "Tiny Plan");
    assert_eq!(input.degree.requirements.len(), 1);
    assert!(input.terms.is_empty());
    assert!(input.transfer.is_empty());
}

#[test]
fn test_validation_reports_all_problems() {
    let bad_plan = r#"
name = "Broken Plan"

[degree]
id = "mini"
name = "Mini Degree"
total_credits = 30

[[degree.requirements]]
id = "intro"
name = "Intro Course"
kind = "required"
credits = 4
courses = ["CPSC 110"]

[[degree.requirements]]
id = "intro"
name = "Duplicate Id"
kind = "required"
credits = 3
courses = ["CPSC 121"]

[[terms]]
id = "2025W1"
label = "Winter 2025 Term 1"
year = 2025
season = "fall"

[[terms.courses]]
code = "CPSC 110"
name = "Computation"
credits = 0
"#;

    let err = parse_plan_str(bad_plan).expect_err("invalid plan must fail");
    let message = err.to_string();
    assert!(message.contains("zero credits"));
    assert!(message.contains("Duplicate requirement id"));
}
