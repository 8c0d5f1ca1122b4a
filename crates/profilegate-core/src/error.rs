//! Error types for profilegate.

use thiserror::Error;

/// Raised when one or more mutually exclusive profile sets are violated.
///
/// The `Display` output is the aggregate failure report consumed by build
/// hosts: a fixed header, one two-space-indented line per failing set, and a
/// footer carrying the active-profile snapshot exactly as supplied (order
/// preserved, duplicates included). Downstream tooling may parse that line
/// structure, so it is part of the contract. The structured accessors expose
/// the same data without parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{report}")]
pub struct RuleViolation {
    report: String,
    descriptions: Vec<String>,
    active_profiles: Vec<String>,
}

impl RuleViolation {
    /// Builds the aggregate report from failing-set descriptions and the
    /// active snapshot, both in the order observed during checking.
    pub fn new(descriptions: Vec<String>, active_profiles: Vec<String>) -> Self {
        let mut report =
            String::from("The following Mutually Exclusive Profile Set rule(s) failed:\n");
        for description in &descriptions {
            report.push_str("  ");
            report.push_str(description);
            report.push('\n');
        }
        report.push_str("Profiles Active were: [");
        report.push_str(&active_profiles.join(", "));
        report.push(']');
        RuleViolation {
            report,
            descriptions,
            active_profiles,
        }
    }

    /// Description lines of the failing sets, in declaration order.
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// The active-profile snapshot the check ran against, order preserved.
    pub fn active_profiles(&self) -> &[String] {
        &self.active_profiles
    }
}
