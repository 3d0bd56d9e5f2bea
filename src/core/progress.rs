//! Progress computation
//!
//! Consumes the scheduled terms, the degree's requirement list, and the
//! transfer-credit flags, and produces a structured progress report. The
//! computation is a pure fold over the requirement list: each requirement's
//! status and transfer top-up are evaluated independently against the same
//! scheduled-course snapshot, then summed. Identical inputs always produce
//! identical reports, and nothing in the inputs is mutated.

use crate::core::categories::{category_coverage, BREADTH_CATEGORIES};
use crate::core::classifier::{classify, AccumulationRule, Classification};
use crate::core::models::{
    Course, CreditRule, Degree, DegreeRequirement, RequirementKind, ScheduledTerm, TransferCredits,
};
use serde::Serialize;
use std::collections::HashSet;

/// Satisfaction state of one breadth category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStatus {
    /// Category key (e.g. "physics")
    pub key: String,
    /// Display label
    pub label: String,
    /// Whether a scheduled course or a transfer flag covers the category
    pub satisfied: bool,
}

/// Category checklist attached to a breadth requirement's status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadthProgress {
    /// Count of distinct satisfied categories
    pub satisfied: usize,
    /// Categories needed for completion
    pub threshold: usize,
    /// Per-category satisfaction, in table order
    pub categories: Vec<CategoryStatus>,
}

/// Per-requirement progress record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementStatus {
    /// Requirement identifier
    pub id: String,
    /// Requirement display name
    pub name: String,
    /// Requirement kind
    pub kind: RequirementKind,
    /// Whether the requirement is satisfied by a single listed course
    pub is_single_course: bool,
    /// Whether the requirement is satisfied
    pub is_completed: bool,
    /// Whether the catch-all credit count was used because the requirement
    /// declared neither a course list nor a matching rule
    pub unclassified: bool,
    /// Credits (or satisfied categories, for breadth) counted so far
    pub completed_credits: u32,
    /// Credit target (or category threshold) shown for this requirement
    pub required_credits: u32,
    /// Category checklist, present only for the breadth requirement
    pub breadth: Option<BreadthProgress>,
}

/// Structured progress report for a whole plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    /// Credits needed to graduate
    pub total_credits: u32,
    /// Credits counted as completed (scheduled plus transfer top-ups)
    pub completed_credits: u32,
    /// Overall percentage, 0–100
    pub percent: u8,
    /// One status per requirement, input order preserved
    pub requirements: Vec<RequirementStatus>,
}

/// Compute a progress report for a degree, the scheduled terms, and the
/// transfer-credit flags.
///
/// The raw completed-credit sum may exceed the degree total; the percentage
/// is clamped to 100. A degree with a 0 credit total always reports 0%.
#[must_use]
pub fn compute(
    degree: &Degree,
    terms: &[ScheduledTerm],
    transfer: &TransferCredits,
) -> ProgressReport {
    let scheduled: Vec<&Course> = terms.iter().flat_map(|t| t.courses.iter()).collect();
    let scheduled_codes: HashSet<&str> = scheduled.iter().map(|c| c.code.as_str()).collect();

    let base_credits: u32 = scheduled.iter().map(|c| c.credits).sum();

    let evaluated: Vec<(RequirementStatus, u32)> = degree
        .requirements
        .iter()
        .map(|req| evaluate(req, &scheduled, &scheduled_codes, transfer))
        .collect();

    let transfer_credits: u32 = evaluated.iter().map(|(_, top_up)| top_up).sum();
    let completed_credits = base_credits + transfer_credits;

    ProgressReport {
        total_credits: degree.total_credits,
        completed_credits,
        percent: overall_percent(completed_credits, degree.total_credits),
        requirements: evaluated.into_iter().map(|(status, _)| status).collect(),
    }
}

/// Overall percentage: `round(min(100, 100 * completed / total))`, or 0 when
/// the total is 0.
fn overall_percent(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (u64::from(completed) * 100 + u64::from(total) / 2) / u64::from(total);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}

/// Evaluate one requirement. Returns its status and the transfer-credit
/// top-up it contributes to the completed total.
fn evaluate(
    requirement: &DegreeRequirement,
    scheduled: &[&Course],
    scheduled_codes: &HashSet<&str>,
    transfer: &TransferCredits,
) -> (RequirementStatus, u32) {
    match classify(requirement) {
        Classification::SingleCourse => single_course(requirement, scheduled_codes, transfer),
        Classification::CreditAccumulation(AccumulationRule::Declared(CreditRule::Breadth {
            threshold,
        })) => breadth(requirement, scheduled, transfer, threshold),
        Classification::CreditAccumulation(rule) => {
            accumulation(requirement, scheduled, transfer, &rule)
        }
    }
}

/// Single-course requirement: satisfied by scheduling any listed course or by
/// a transfer flag.
///
/// The top-up compensates the completed total only when the transfer flag is
/// doing the work; a scheduled course already contributed its credits to the
/// base sum, so topping up in that case would double count.
fn single_course(
    requirement: &DegreeRequirement,
    scheduled_codes: &HashSet<&str>,
    transfer: &TransferCredits,
) -> (RequirementStatus, u32) {
    let covered = requirement
        .courses
        .iter()
        .any(|code| scheduled_codes.contains(code.as_str()));
    let via_transfer = transfer.contains(&requirement.id);
    let is_completed = covered || via_transfer;

    let display = requirement.display_credits();
    let top_up = if via_transfer && !covered { display } else { 0 };

    let status = RequirementStatus {
        id: requirement.id.clone(),
        name: requirement.name.clone(),
        kind: requirement.kind,
        is_single_course: true,
        is_completed,
        unclassified: false,
        completed_credits: if is_completed { display } else { 0 },
        required_credits: display,
        breadth: None,
    };
    (status, top_up)
}

/// Credit-accumulation requirement: sum credits of matching scheduled
/// courses. The sum is uncapped; completion needs a positive target, so a
/// 0-target requirement with no rule match stays incomplete unless a
/// transfer flag covers it.
fn accumulation(
    requirement: &DegreeRequirement,
    scheduled: &[&Course],
    transfer: &TransferCredits,
    rule: &AccumulationRule,
) -> (RequirementStatus, u32) {
    let (matched, unclassified) = match rule {
        AccumulationRule::Declared(rule) => (
            scheduled
                .iter()
                .filter(|course| requirement.admits(rule, course))
                .map(|course| course.credits)
                .sum(),
            false,
        ),
        // Catch-all: count every scheduled credit rather than under-report an
        // unrecognized requirement, but flag the status as unclassified.
        AccumulationRule::Unclassified => (scheduled.iter().map(|c| c.credits).sum(), true),
    };

    let via_transfer = transfer.contains(&requirement.id);
    let is_completed = (requirement.credits > 0 && matched >= requirement.credits) || via_transfer;

    let status = RequirementStatus {
        id: requirement.id.clone(),
        name: requirement.name.clone(),
        kind: requirement.kind,
        is_single_course: false,
        is_completed,
        unclassified,
        completed_credits: matched,
        required_credits: requirement.display_credits(),
        breadth: None,
    };
    (status, 0)
}

/// Breadth requirement: satisfied when enough distinct categories are covered
/// by scheduled courses or per-category transfer flags. The displayed
/// "credits" are the distinct-category count, not a credit sum.
fn breadth(
    requirement: &DegreeRequirement,
    scheduled: &[&Course],
    transfer: &TransferCredits,
    threshold: usize,
) -> (RequirementStatus, u32) {
    let coverage = category_coverage(scheduled.iter().copied());

    let categories: Vec<CategoryStatus> = BREADTH_CATEGORIES
        .iter()
        .map(|category| CategoryStatus {
            key: category.key.to_string(),
            label: category.label.to_string(),
            satisfied: coverage.get(category.key).copied().unwrap_or(false)
                || transfer.contains_breadth(&requirement.id, category.key),
        })
        .collect();

    let satisfied = categories.iter().filter(|c| c.satisfied).count();
    let is_completed = satisfied >= threshold || transfer.contains(&requirement.id);

    let status = RequirementStatus {
        id: requirement.id.clone(),
        name: requirement.name.clone(),
        kind: requirement.kind,
        is_single_course: false,
        is_completed,
        unclassified: false,
        completed_credits: u32::try_from(satisfied).unwrap_or(u32::MAX),
        required_credits: u32::try_from(threshold).unwrap_or(u32::MAX),
        breadth: Some(BreadthProgress {
            satisfied,
            threshold,
            categories,
        }),
    };
    (status, 0)
}
