//! Plan loading for `degree-audit`

pub mod plan_file;

pub use plan_file::{parse_plan_str, parse_plan_toml, AuditInput, PlanFile};
