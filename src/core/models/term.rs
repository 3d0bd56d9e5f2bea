//! Scheduled-term model

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Academic session kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermSeason {
    /// September–December session
    Fall,
    /// January–April session
    Winter,
    /// May–August session
    Summer,
}

impl fmt::Display for TermSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Fall => "fall",
            Self::Winter => "winter",
            Self::Summer => "summer",
        };
        write!(f, "{as_str}")
    }
}

/// One academic term with the courses placed in it
///
/// A course code is expected to be unique within a term (the presentation
/// layer enforces that); the same code may appear in two different terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTerm {
    /// Term identifier (e.g. "2025W1")
    pub id: String,

    /// Display label (e.g. "Winter 2025 Term 1")
    pub label: String,

    /// Calendar year the term starts in
    pub year: u32,

    /// Session kind
    pub season: TermSeason,

    /// Courses placed in this term, in placement order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl ScheduledTerm {
    /// Create a new empty term
    #[must_use]
    pub const fn new(id: String, label: String, year: u32, season: TermSeason) -> Self {
        Self {
            id,
            label,
            year,
            season,
            courses: Vec::new(),
        }
    }

    /// Place a course in this term
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Whether a course with the given code is placed in this term
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.code == code)
    }

    /// Total credits placed in this term
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

/// Course codes that appear in more than one of the given terms
///
/// The core itself never rejects cross-term duplicates (a retake is a
/// legitimate plan); this helper lets a caller surface them as a warning.
#[must_use]
pub fn duplicate_codes(terms: &[ScheduledTerm]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates = Vec::new();

    for term in terms {
        for course in &term.courses {
            if !seen.insert(course.code.as_str()) && !duplicates.contains(&course.code) {
                duplicates.push(course.code.clone());
            }
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, credits: u32) -> Course {
        Course::new(code.to_string(), format!("Course {code}"), credits)
    }

    #[test]
    fn term_creation() {
        let term = ScheduledTerm::new(
            "2025W1".to_string(),
            "Winter 2025 Term 1".to_string(),
            2025,
            TermSeason::Fall,
        );

        assert_eq!(term.id, "2025W1");
        assert_eq!(term.year, 2025);
        assert!(term.courses.is_empty());
        assert_eq!(term.total_credits(), 0);
    }

    #[test]
    fn add_and_total_credits() {
        let mut term = ScheduledTerm::new(
            "2025W1".to_string(),
            "Winter 2025 Term 1".to_string(),
            2025,
            TermSeason::Fall,
        );
        term.add_course(course("CPSC 110", 4));
        term.add_course(course("MATH 100", 3));

        assert_eq!(term.courses.len(), 2);
        assert_eq!(term.total_credits(), 7);
        assert!(term.contains_code("CPSC 110"));
        assert!(!term.contains_code("CPSC 121"));
    }

    #[test]
    fn season_display() {
        assert_eq!(TermSeason::Fall.to_string(), "fall");
        assert_eq!(TermSeason::Winter.to_string(), "winter");
        assert_eq!(TermSeason::Summer.to_string(), "summer");
    }

    #[test]
    fn duplicate_codes_across_terms() {
        let mut first = ScheduledTerm::new(
            "2025W1".to_string(),
            "Winter 2025 Term 1".to_string(),
            2025,
            TermSeason::Fall,
        );
        first.add_course(course("CPSC 110", 4));

        let mut second = ScheduledTerm::new(
            "2025W2".to_string(),
            "Winter 2025 Term 2".to_string(),
            2026,
            TermSeason::Winter,
        );
        second.add_course(course("CPSC 110", 4));
        second.add_course(course("CPSC 121", 4));

        let dups = duplicate_codes(&[first, second]);
        assert_eq!(dups, vec!["CPSC 110".to_string()]);
    }

    #[test]
    fn no_duplicates_in_disjoint_terms() {
        let mut first = ScheduledTerm::new(
            "2025W1".to_string(),
            "Winter 2025 Term 1".to_string(),
            2025,
            TermSeason::Fall,
        );
        first.add_course(course("CPSC 110", 4));

        assert!(duplicate_codes(&[first]).is_empty());
    }
}
