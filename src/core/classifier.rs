//! Requirement classification
//!
//! University calendars express both "take one of these specific courses"
//! (small explicit list, little or no credit bookkeeping) and "accumulate N
//! credits matching a category" (no fixed list, computed from course codes).
//! The two need different satisfaction logic and different display (checkbox
//! vs progress bar), so every requirement is classified before evaluation.

use crate::core::categories::BREADTH_THRESHOLD;
use crate::core::models::{CreditRule, DegreeRequirement, RequirementKind};

/// Largest target credit value a single-course requirement can carry.
/// Anything above this is a credit bucket even when an explicit list exists.
pub const SINGLE_COURSE_CREDIT_CEILING: u32 = 6;

/// How a credit-accumulation requirement decides which courses count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccumulationRule {
    /// A declared (or derived) matching rule
    Declared(CreditRule),
    /// No list and no rule: the catch-all that counts every scheduled
    /// credit. Kept distinguishable so reports can surface authoring gaps
    /// instead of passing the count off as a real match.
    Unclassified,
}

/// Satisfaction model for a requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Satisfied by scheduling any one of the listed courses
    SingleCourse,
    /// Satisfied by accumulating credits (or categories, for breadth)
    CreditAccumulation(AccumulationRule),
}

/// Classify a requirement.
///
/// A requirement is `SingleCourse` iff its explicit course list is non-empty
/// and its target credit value is at most [`SINGLE_COURSE_CREDIT_CEILING`]
/// (a 0 target, meaning "not credit-counted", also qualifies). Everything
/// else accumulates: the declared rule wins; a breadth-kind requirement
/// without one gets the canonical breadth rule; an explicit list with a
/// large target counts credits from that list; and a requirement with
/// nothing declared at all falls into the distinguishable unclassified
/// catch-all.
#[must_use]
pub fn classify(requirement: &DegreeRequirement) -> Classification {
    if !requirement.courses.is_empty() && requirement.credits <= SINGLE_COURSE_CREDIT_CEILING {
        return Classification::SingleCourse;
    }

    if let Some(rule) = &requirement.rule {
        return Classification::CreditAccumulation(AccumulationRule::Declared(rule.clone()));
    }

    if requirement.kind == RequirementKind::Breadth {
        return Classification::CreditAccumulation(AccumulationRule::Declared(
            CreditRule::Breadth {
                threshold: BREADTH_THRESHOLD,
            },
        ));
    }

    if !requirement.courses.is_empty() {
        return Classification::CreditAccumulation(AccumulationRule::Declared(
            CreditRule::ExplicitList,
        ));
    }

    Classification::CreditAccumulation(AccumulationRule::Unclassified)
}
