//! Degree requirement model and credit-matching rules

use super::Course;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display credit value used when a requirement's nominal target is 0.
/// A zero target means "not credit-counted"; the UI still shows a bar/checkbox
/// worth of credits for such rows.
pub const DISPLAY_CREDIT_FALLBACK: u32 = 3;

/// Kind of graduation requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    /// A mandatory course or course group
    Required,
    /// An elective credit bucket
    Elective,
    /// A multi-category breadth condition
    Breadth,
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Required => "required",
            Self::Elective => "elective",
            Self::Breadth => "breadth",
        };
        write!(f, "{as_str}")
    }
}

/// Declarative predicate describing which scheduled courses count toward a
/// credit-accumulation requirement.
///
/// Requirement catalogs express these rules as prose ("9 credits of CPSC
/// numbered 300 or above"); plan files declare them as tagged values so the
/// engine never has to infer intent from display-name text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CreditRule {
    /// Count credits of scheduled courses in the requirement's explicit list
    ExplicitList,
    /// Count credits of courses whose faculty label matches
    FacultyEquals {
        /// Faculty label to match (case-insensitive)
        faculty: String,
    },
    /// Count credits of a subject at or above a level
    SubjectAtLevel {
        /// Subject prefix (e.g. "CPSC")
        subject: String,
        /// Minimum numeric level (inclusive)
        min_level: u32,
    },
    /// Count credits of a subject within an inclusive level range
    SubjectLevelRange {
        /// Subject prefix (e.g. "MATH")
        subject: String,
        /// Lowest numeric level (inclusive)
        lo: u32,
        /// Highest numeric level (inclusive)
        hi: u32,
    },
    /// Count credits at or above a level, any subject
    MinLevel {
        /// Minimum numeric level (inclusive)
        min_level: u32,
    },
    /// Satisfied by covering distinct subject categories, not by a credit sum
    Breadth {
        /// Number of distinct categories required
        threshold: usize,
    },
}

/// One graduation condition a degree imposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRequirement {
    /// Stable identifier (e.g. "cpsc-core-110")
    pub id: String,

    /// Display name shown in progress reports
    pub name: String,

    /// Requirement kind
    pub kind: RequirementKind,

    /// Target credit value; 0 means "not credit-counted, satisfied by presence"
    #[serde(default)]
    pub credits: u32,

    /// Explicit list of qualifying course codes; empty means the rule decides
    #[serde(default)]
    pub courses: Vec<String>,

    /// Declarative matching rule for credit accumulation, when one applies
    #[serde(default)]
    pub rule: Option<CreditRule>,
}

impl DegreeRequirement {
    /// Create a new requirement with no course list and no rule
    #[must_use]
    pub const fn new(id: String, name: String, kind: RequirementKind, credits: u32) -> Self {
        Self {
            id,
            name,
            kind,
            credits,
            courses: Vec::new(),
            rule: None,
        }
    }

    /// Attach an explicit qualifying course list, returning the requirement
    #[must_use]
    pub fn with_courses(mut self, courses: &[&str]) -> Self {
        self.courses = courses.iter().map(ToString::to_string).collect();
        self
    }

    /// Attach a credit-matching rule, returning the requirement
    #[must_use]
    pub fn with_rule(mut self, rule: CreditRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Credit value used for display: the target, or the fallback when the
    /// target is 0.
    #[must_use]
    pub const fn display_credits(&self) -> u32 {
        if self.credits == 0 {
            DISPLAY_CREDIT_FALLBACK
        } else {
            self.credits
        }
    }

    /// Whether a scheduled course counts toward this requirement under the
    /// given rule.
    ///
    /// `Breadth` never admits individual courses here; category coverage is
    /// evaluated separately.
    #[must_use]
    pub fn admits(&self, rule: &CreditRule, course: &Course) -> bool {
        match rule {
            CreditRule::ExplicitList => self.courses.iter().any(|code| *code == course.code),
            CreditRule::FacultyEquals { faculty } => course
                .faculty
                .as_deref()
                .is_some_and(|f| f.eq_ignore_ascii_case(faculty)),
            CreditRule::SubjectAtLevel { subject, min_level } => course
                .parsed_code()
                .is_some_and(|c| c.subject.eq_ignore_ascii_case(subject) && c.level >= *min_level),
            CreditRule::SubjectLevelRange { subject, lo, hi } => {
                course.parsed_code().is_some_and(|c| {
                    c.subject.eq_ignore_ascii_case(subject) && c.level >= *lo && c.level <= *hi
                })
            }
            CreditRule::MinLevel { min_level } => course
                .parsed_code()
                .is_some_and(|c| c.level >= *min_level),
            CreditRule::Breadth { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, credits: u32) -> Course {
        Course::new(code.to_string(), format!("Course {code}"), credits)
    }

    #[test]
    fn display_credits_falls_back_when_zero() {
        let req = DegreeRequirement::new(
            "lab".to_string(),
            "Lab Requirement".to_string(),
            RequirementKind::Required,
            0,
        );
        assert_eq!(req.display_credits(), DISPLAY_CREDIT_FALLBACK);

        let req = DegreeRequirement::new(
            "core".to_string(),
            "Core Course".to_string(),
            RequirementKind::Required,
            4,
        );
        assert_eq!(req.display_credits(), 4);
    }

    #[test]
    fn explicit_list_admits_listed_codes_only() {
        let req = DegreeRequirement::new(
            "intro".to_string(),
            "Introductory Programming".to_string(),
            RequirementKind::Required,
            8,
        )
        .with_courses(&["CPSC 110", "CPSC 103"]);

        assert!(req.admits(&CreditRule::ExplicitList, &course("CPSC 110", 4)));
        assert!(!req.admits(&CreditRule::ExplicitList, &course("CPSC 121", 4)));
    }

    #[test]
    fn subject_at_level_filters_below_threshold() {
        let req = DegreeRequirement::new(
            "upper-cpsc".to_string(),
            "Upper-level CPSC".to_string(),
            RequirementKind::Elective,
            9,
        );
        let rule = CreditRule::SubjectAtLevel {
            subject: "CPSC".to_string(),
            min_level: 300,
        };

        assert!(req.admits(&rule, &course("CPSC 310", 4)));
        assert!(!req.admits(&rule, &course("CPSC 210", 4)));
        assert!(!req.admits(&rule, &course("MATH 310", 3)));
    }

    #[test]
    fn subject_level_range_is_inclusive() {
        let req = DegreeRequirement::new(
            "stats".to_string(),
            "Statistics".to_string(),
            RequirementKind::Elective,
            3,
        );
        let rule = CreditRule::SubjectLevelRange {
            subject: "MATH".to_string(),
            lo: 302,
            hi: 303,
        };

        assert!(req.admits(&rule, &course("MATH 302", 3)));
        assert!(req.admits(&rule, &course("MATH 303", 3)));
        assert!(!req.admits(&rule, &course("MATH 304", 3)));
        assert!(!req.admits(&rule, &course("MATH 301", 3)));
    }

    #[test]
    fn faculty_match_is_case_insensitive() {
        let req = DegreeRequirement::new(
            "sci".to_string(),
            "Science Credits".to_string(),
            RequirementKind::Elective,
            72,
        );
        let rule = CreditRule::FacultyEquals {
            faculty: "Science".to_string(),
        };

        assert!(req.admits(&rule, &course("BIOL 111", 3).with_faculty("science")));
        assert!(!req.admits(&rule, &course("ENGL 110", 3).with_faculty("Arts")));
        assert!(!req.admits(&rule, &course("BIOL 111", 3)));
    }

    #[test]
    fn min_level_ignores_subject() {
        let req = DegreeRequirement::new(
            "upper".to_string(),
            "Upper-level Electives".to_string(),
            RequirementKind::Elective,
            30,
        );
        let rule = CreditRule::MinLevel { min_level: 300 };

        assert!(req.admits(&rule, &course("HIST 305", 3)));
        assert!(!req.admits(&rule, &course("HIST 205", 3)));
    }

    #[test]
    fn malformed_codes_never_match_level_rules() {
        let req = DegreeRequirement::new(
            "upper".to_string(),
            "Upper-level Electives".to_string(),
            RequirementKind::Elective,
            30,
        );
        let rule = CreditRule::MinLevel { min_level: 300 };

        assert!(!req.admits(&rule, &course("SCIE ONE", 3)));
    }

    #[test]
    fn rule_round_trips_through_toml() {
        let rule = CreditRule::SubjectAtLevel {
            subject: "CPSC".to_string(),
            min_level: 300,
        };
        let text = toml::to_string(&rule).expect("serialize");
        let parsed: CreditRule = toml::from_str(&text).expect("deserialize");
        assert_eq!(parsed, rule);
    }
}
