//! Course model and course-code parsing

use serde::{Deserialize, Serialize};

/// A parsed course code: alphabetic subject prefix plus numeric level.
///
/// Codes that do not match the `LETTERS+ NUMBER+` shape (e.g. "CPSC 110A",
/// "SCIE ONE") have no parsed form and are excluded from category matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseCode {
    /// Subject prefix in upper case (e.g. "CPSC")
    pub subject: String,
    /// Numeric course level (e.g. 110)
    pub level: u32,
}

impl CourseCode {
    /// Parse a course code string into its subject prefix and numeric level.
    ///
    /// Accepts an optional single run of whitespace between the letters and
    /// the digits ("CPSC 110" and "CPSC110" both parse). Returns `None` for
    /// anything else; malformed codes are simply ignored by callers.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        let subject: String = trimmed
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect();
        if subject.is_empty() {
            return None;
        }
        let rest = trimmed[subject.len()..].trim_start();
        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let level = rest.parse().ok()?;
        Some(Self {
            subject: subject.to_ascii_uppercase(),
            level,
        })
    }
}

/// Represents a course placed in a scheduled term
///
/// Immutable once placed; the calculator never mutates scheduled courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Subject-code string (e.g. "CPSC 110")
    pub code: String,

    /// Display name (e.g. "Computation, Programs, and Programming")
    pub name: String,

    /// Credit value (positive integer)
    pub credits: u32,

    /// Faculty label (e.g. "Science"), when known
    #[serde(default)]
    pub faculty: Option<String>,

    /// Prerequisite groups - each inner list is a one-of set of course codes
    #[serde(default)]
    pub prerequisites: Vec<Vec<String>>,

    /// Corequisite groups - each inner list is a one-of set of course codes
    #[serde(default)]
    pub corequisites: Vec<Vec<String>>,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Subject-code string (e.g. "CPSC 110")
    /// * `name` - Full course name
    /// * `credits` - Credit value
    #[must_use]
    pub const fn new(code: String, name: String, credits: u32) -> Self {
        Self {
            code,
            name,
            credits,
            faculty: None,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
        }
    }

    /// Set the faculty label, returning the modified course
    #[must_use]
    pub fn with_faculty(mut self, faculty: &str) -> Self {
        self.faculty = Some(faculty.to_string());
        self
    }

    /// Parse this course's code into subject prefix and numeric level
    #[must_use]
    pub fn parsed_code(&self) -> Option<CourseCode> {
        CourseCode::parse(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_code() {
        let code = CourseCode::parse("CPSC 110").expect("valid code");
        assert_eq!(code.subject, "CPSC");
        assert_eq!(code.level, 110);
    }

    #[test]
    fn parses_without_space() {
        let code = CourseCode::parse("MATH302").expect("valid code");
        assert_eq!(code.subject, "MATH");
        assert_eq!(code.level, 302);
    }

    #[test]
    fn uppercases_subject() {
        let code = CourseCode::parse("cpsc 110").expect("valid code");
        assert_eq!(code.subject, "CPSC");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(CourseCode::parse("").is_none());
        assert!(CourseCode::parse("110").is_none());
        assert!(CourseCode::parse("CPSC").is_none());
        assert!(CourseCode::parse("CPSC 110A").is_none());
        assert!(CourseCode::parse("SCIE ONE").is_none());
    }

    #[test]
    fn course_creation() {
        let course = Course::new(
            "CPSC 110".to_string(),
            "Computation, Programs, and Programming".to_string(),
            4,
        )
        .with_faculty("Science");

        assert_eq!(course.code, "CPSC 110");
        assert_eq!(course.credits, 4);
        assert_eq!(course.faculty.as_deref(), Some("Science"));
        assert!(course.prerequisites.is_empty());
        assert!(course.corequisites.is_empty());
    }

    #[test]
    fn parsed_code_round_trip() {
        let course = Course::new("STAT 200".to_string(), "Elementary Statistics".to_string(), 3);
        let parsed = course.parsed_code().expect("valid code");
        assert_eq!(parsed.subject, "STAT");
        assert_eq!(parsed.level, 200);
    }
}
