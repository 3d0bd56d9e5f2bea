//! TOML parser for plan documents
//!
//! A plan file declares the degree (with its program-level requirements),
//! optional faculty-level requirements, the scheduled terms, and any
//! transfer-credit flags. Faculty requirements are prepended to the degree's
//! requirement list on load, preserving authored order on both sides.

use crate::core::models::{Degree, DegreeRequirement, ScheduledTerm, TransferCredits};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// On-disk shape of a plan document
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    /// Plan display name
    pub name: String,

    /// Degree definition with program-level requirements
    pub degree: Degree,

    /// Faculty-level requirements, prepended to the degree's list
    #[serde(default)]
    pub faculty_requirements: Vec<DegreeRequirement>,

    /// Scheduled terms in session order
    #[serde(default)]
    pub terms: Vec<ScheduledTerm>,

    /// Requirement ids (or synthetic breadth-category ids) satisfied by
    /// transfer credit
    #[serde(default)]
    pub transfer_credits: TransferCredits,
}

/// A loaded, validated plan ready for the progress calculator
#[derive(Debug, Clone)]
pub struct AuditInput {
    /// Plan display name
    pub plan_name: String,
    /// Assembled degree (faculty requirements first)
    pub degree: Degree,
    /// Scheduled terms
    pub terms: Vec<ScheduledTerm>,
    /// Transfer-credit flags
    pub transfer: TransferCredits,
}

/// Parse a plan TOML file into an [`AuditInput`]
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML does not match the
/// plan schema, or validation finds structural problems.
pub fn parse_plan_toml<P: AsRef<Path>>(path: P) -> Result<AuditInput, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_plan_str(&content)
}

/// Parse a plan document from a TOML string
///
/// # Errors
/// Returns an error if the TOML does not match the plan schema or validation
/// finds structural problems.
pub fn parse_plan_str(content: &str) -> Result<AuditInput, Box<dyn Error>> {
    let plan: PlanFile = toml::from_str(content)?;

    if let Err(problems) = validate(&plan) {
        return Err(problems.join("; ").into());
    }

    let PlanFile {
        name,
        degree,
        faculty_requirements,
        terms,
        transfer_credits,
    } = plan;

    let assembled = Degree::assemble(
        degree.id,
        degree.name,
        degree.total_credits,
        faculty_requirements,
        degree.requirements,
    );

    Ok(AuditInput {
        plan_name: name,
        degree: assembled,
        terms,
        transfer: transfer_credits,
    })
}

/// Validate a plan document's structure
///
/// # Errors
/// Returns all problems found: zero-credit courses, duplicate course codes
/// within a term, requirements without an id, and duplicate requirement ids.
pub fn validate(plan: &PlanFile) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    for term in &plan.terms {
        let mut seen: Vec<&str> = Vec::new();
        for course in &term.courses {
            if course.credits == 0 {
                problems.push(format!(
                    "Term '{}': course '{}' has zero credits",
                    term.id, course.code
                ));
            }
            if seen.contains(&course.code.as_str()) {
                problems.push(format!(
                    "Term '{}': duplicate course '{}'",
                    term.id, course.code
                ));
            }
            seen.push(course.code.as_str());
        }
    }

    let mut req_ids: Vec<&str> = Vec::new();
    for requirement in plan
        .faculty_requirements
        .iter()
        .chain(&plan.degree.requirements)
    {
        if requirement.id.is_empty() {
            problems.push(format!("Requirement '{}' has an empty id", requirement.name));
        } else if req_ids.contains(&requirement.id.as_str()) {
            problems.push(format!("Duplicate requirement id '{}'", requirement.id));
        }
        req_ids.push(requirement.id.as_str());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RequirementKind;

    const MINIMAL_PLAN: &str = r#"
name = "Test Plan"
transfer_credits = ["communication"]

[degree]
id = "bsc-cpsc"
name = "BSc Major in Computer Science"
total_credits = 120

[[faculty_requirements]]
id = "communication"
name = "Communication Requirement"
kind = "required"
credits = 6
courses = ["WRDS 150", "SCIE 113"]

[[degree.requirements]]
id = "cpsc-110"
name = "CPSC 110"
kind = "required"
credits = 4
courses = ["CPSC 110"]

[[degree.requirements]]
id = "upper-cpsc"
name = "9 credits of CPSC 300 or above"
kind = "elective"
credits = 9
rule = { type = "subject_at_level", subject = "CPSC", min_level = 300 }

[[terms]]
id = "2025W1"
label = "Winter 2025 Term 1"
year = 2025
season = "fall"

[[terms.courses]]
code = "CPSC 110"
name = "Computation, Programs, and Programming"
credits = 4
faculty = "Science"
"#;

    #[test]
    fn parses_minimal_plan() {
        let input = parse_plan_str(MINIMAL_PLAN).expect("valid plan");

        assert_eq!(input.plan_name, "Test Plan");
        assert_eq!(input.degree.total_credits, 120);
        assert_eq!(input.terms.len(), 1);
        assert!(input.transfer.contains("communication"));
    }

    #[test]
    fn faculty_requirements_come_first() {
        let input = parse_plan_str(MINIMAL_PLAN).expect("valid plan");
        let ids: Vec<&str> = input
            .degree
            .requirements
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["communication", "cpsc-110", "upper-cpsc"]);
    }

    #[test]
    fn tagged_rule_deserializes() {
        let input = parse_plan_str(MINIMAL_PLAN).expect("valid plan");
        let upper = input
            .degree
            .get_requirement("upper-cpsc")
            .expect("requirement");
        assert!(matches!(
            upper.rule,
            Some(crate::core::models::CreditRule::SubjectAtLevel { ref subject, min_level: 300 })
                if subject == "CPSC"
        ));
        assert_eq!(upper.kind, RequirementKind::Elective);
    }

    #[test]
    fn rejects_zero_credit_course() {
        let bad = MINIMAL_PLAN.replace("credits = 4\nfaculty", "credits = 0\nfaculty");
        let err = parse_plan_str(&bad).expect_err("zero credits must fail");
        assert!(err.to_string().contains("zero credits"));
    }

    #[test]
    fn rejects_duplicate_requirement_ids() {
        let bad = MINIMAL_PLAN.replace("id = \"upper-cpsc\"", "id = \"cpsc-110\"");
        let err = parse_plan_str(&bad).expect_err("duplicate id must fail");
        assert!(err.to_string().contains("Duplicate requirement id"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(parse_plan_str("name = ").is_err());
    }
}
