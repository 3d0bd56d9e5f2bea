//! Degree model

use super::DegreeRequirement;
use serde::{Deserialize, Serialize};

/// Represents a degree program with its graduation requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// Stable identifier (e.g. "bsc-cpsc")
    pub id: String,

    /// Display name (e.g. "BSc Major in Computer Science")
    pub name: String,

    /// Total credits needed to graduate
    pub total_credits: u32,

    /// Ordered requirement list; faculty-level requirements come before
    /// program-level ones, in authored order (never sorted)
    #[serde(default)]
    pub requirements: Vec<DegreeRequirement>,
}

impl Degree {
    /// Create a new degree with no requirements
    #[must_use]
    pub const fn new(id: String, name: String, total_credits: u32) -> Self {
        Self {
            id,
            name,
            total_credits,
            requirements: Vec::new(),
        }
    }

    /// Assemble a degree from faculty-level and program-level requirement
    /// lists, faculty first. Both lists keep their relative order.
    #[must_use]
    pub fn assemble(
        id: String,
        name: String,
        total_credits: u32,
        faculty: Vec<DegreeRequirement>,
        program: Vec<DegreeRequirement>,
    ) -> Self {
        let mut requirements = faculty;
        requirements.extend(program);
        Self {
            id,
            name,
            total_credits,
            requirements,
        }
    }

    /// Append a requirement to the list
    pub fn add_requirement(&mut self, requirement: DegreeRequirement) {
        self.requirements.push(requirement);
    }

    /// Get a requirement by its identifier
    #[must_use]
    pub fn get_requirement(&self, id: &str) -> Option<&DegreeRequirement> {
        self.requirements.iter().find(|r| r.id == id)
    }
}
