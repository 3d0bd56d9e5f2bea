//! Breadth-category predicates and coverage evaluation
//!
//! A fixed table of subject categories mirrors the science curriculum's
//! breadth definitions. Every scheduled course is evaluated against every
//! category independently, so a single course can satisfy several categories
//! at once (e.g. MATH 302 counts as both mathematics and statistics).

use crate::core::models::{Course, CourseCode};
use std::collections::BTreeMap;

/// Number of distinct categories the reference breadth rule requires
pub const BREADTH_THRESHOLD: usize = 6;

/// Rule deciding whether a parsed course code belongs to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPredicate {
    /// Any numeric level of the subject
    Subject {
        /// Subject prefix (e.g. "CHEM")
        subject: &'static str,
    },
    /// Any numeric level of the subject except the listed levels
    SubjectExceptLevels {
        /// Subject prefix
        subject: &'static str,
        /// Levels that do not count
        excluded_levels: &'static [u32],
    },
    /// Subject with numeric level within an inclusive range
    SubjectLevelRange {
        /// Subject prefix
        subject: &'static str,
        /// Lowest level (inclusive)
        lo: u32,
        /// Highest level (inclusive)
        hi: u32,
    },
}

impl CategoryPredicate {
    /// Whether the parsed code matches this predicate
    #[must_use]
    pub fn matches(&self, code: &CourseCode) -> bool {
        match self {
            Self::Subject { subject } => code.subject == *subject,
            Self::SubjectExceptLevels {
                subject,
                excluded_levels,
            } => code.subject == *subject && !excluded_levels.contains(&code.level),
            Self::SubjectLevelRange { subject, lo, hi } => {
                code.subject == *subject && code.level >= *lo && code.level <= *hi
            }
        }
    }
}

/// One named breadth category with its membership predicates
#[derive(Debug, Clone, Copy)]
pub struct BreadthCategory {
    /// Stable key used in reports and synthetic transfer ids
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    predicates: &'static [CategoryPredicate],
}

impl BreadthCategory {
    /// Whether a course belongs to this category.
    /// Courses with malformed codes belong to no category.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        course
            .parsed_code()
            .is_some_and(|code| self.predicates.iter().any(|p| p.matches(&code)))
    }
}

/// The reference category table: 7 science subject areas.
///
/// MATH 302/303 (probability) also count toward statistics, and first-year
/// seminar levels of EOSC are excluded from earth science per the calendar.
pub const BREADTH_CATEGORIES: &[BreadthCategory] = &[
    BreadthCategory {
        key: "mathematics",
        label: "Mathematics",
        predicates: &[CategoryPredicate::Subject { subject: "MATH" }],
    },
    BreadthCategory {
        key: "chemistry",
        label: "Chemistry",
        predicates: &[CategoryPredicate::Subject { subject: "CHEM" }],
    },
    BreadthCategory {
        key: "physics",
        label: "Physics",
        predicates: &[CategoryPredicate::Subject { subject: "PHYS" }],
    },
    BreadthCategory {
        key: "biology",
        label: "Biology",
        predicates: &[CategoryPredicate::Subject { subject: "BIOL" }],
    },
    BreadthCategory {
        key: "statistics",
        label: "Statistics",
        predicates: &[
            CategoryPredicate::Subject { subject: "STAT" },
            CategoryPredicate::SubjectLevelRange {
                subject: "MATH",
                lo: 302,
                hi: 303,
            },
        ],
    },
    BreadthCategory {
        key: "computer-science",
        label: "Computer Science",
        predicates: &[CategoryPredicate::Subject { subject: "CPSC" }],
    },
    BreadthCategory {
        key: "earth-science",
        label: "Earth and Planetary Science",
        predicates: &[
            CategoryPredicate::SubjectExceptLevels {
                subject: "EOSC",
                excluded_levels: &[111],
            },
            CategoryPredicate::Subject { subject: "ASTR" },
            CategoryPredicate::Subject { subject: "ATSC" },
        ],
    },
];

/// Look up a category by its stable key
#[must_use]
pub fn find_category(key: &str) -> Option<&'static BreadthCategory> {
    BREADTH_CATEGORIES.iter().find(|c| c.key == key)
}

/// Evaluate every category against every scheduled course.
///
/// Returns a mapping from category key to whether at least one scheduled
/// course belongs to it. Every category key appears in the result.
#[must_use]
pub fn category_coverage<'a, I>(courses: I) -> BTreeMap<&'static str, bool>
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut coverage: BTreeMap<&'static str, bool> =
        BREADTH_CATEGORIES.iter().map(|c| (c.key, false)).collect();

    for course in courses {
        for category in BREADTH_CATEGORIES {
            if category.matches(course) {
                coverage.insert(category.key, true);
            }
        }
    }

    coverage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn course(code: &str) -> Course {
        Course::new(code.to_string(), format!("Course {code}"), 3)
    }

    #[test]
    fn table_has_seven_categories() {
        assert_eq!(BREADTH_CATEGORIES.len(), 7);
        assert!(BREADTH_THRESHOLD <= BREADTH_CATEGORIES.len());
    }

    #[test]
    fn subject_predicate_matches_any_level() {
        let chemistry = find_category("chemistry").expect("category");
        assert!(chemistry.matches(&course("CHEM 121")));
        assert!(chemistry.matches(&course("CHEM 402")));
        assert!(!chemistry.matches(&course("PHYS 121")));
    }

    #[test]
    fn excluded_levels_do_not_count() {
        let earth = find_category("earth-science").expect("category");
        assert!(earth.matches(&course("EOSC 114")));
        assert!(!earth.matches(&course("EOSC 111")));
        assert!(earth.matches(&course("ASTR 101")));
    }

    #[test]
    fn one_course_can_satisfy_two_categories() {
        let math = find_category("mathematics").expect("category");
        let stats = find_category("statistics").expect("category");

        let probability = course("MATH 302");
        assert!(math.matches(&probability));
        assert!(stats.matches(&probability));
    }

    #[test]
    fn malformed_codes_belong_to_no_category() {
        let odd = course("SCIE ONE");
        for category in BREADTH_CATEGORIES {
            assert!(!category.matches(&odd));
        }
    }

    #[test]
    fn coverage_lists_every_category() {
        let courses = [course("MATH 100"), course("CHEM 121")];
        let coverage = category_coverage(&courses);

        assert_eq!(coverage.len(), BREADTH_CATEGORIES.len());
        assert_eq!(coverage.get("mathematics"), Some(&true));
        assert_eq!(coverage.get("chemistry"), Some(&true));
        assert_eq!(coverage.get("physics"), Some(&false));
    }

    #[test]
    fn coverage_counts_distinct_categories_not_courses() {
        let courses = [course("MATH 100"), course("MATH 200"), course("MATH 300")];
        let coverage = category_coverage(&courses);
        let satisfied = coverage.values().filter(|v| **v).count();
        assert_eq!(satisfied, 1);
    }
}
