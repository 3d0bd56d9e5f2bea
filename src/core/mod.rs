//! Core module for the requirement-satisfaction engine and its collaborators

pub mod categories;
pub mod classifier;
pub mod config;
pub mod models;
pub mod planner;
pub mod progress;
pub mod progress_export;
pub mod report;

/// Returns the current version of the `degree-audit` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
