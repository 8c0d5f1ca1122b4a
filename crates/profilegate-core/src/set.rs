//! Mutually exclusive profile sets.
//!
//! A [`ProfileSet`] declares a group of profile names that must not be
//! simultaneously active, optionally requiring exactly one of them to be
//! active. Evaluation compares the declared names against an active-profile
//! snapshot and returns an explicit [`Evaluation`].

use std::collections::BTreeSet;

use crate::status::{Evaluation, RuleStatus};

/// A set of mutually exclusive profile names.
///
/// Names are parsed from a comma-separated string; each token is trimmed and
/// duplicates collapse. Empty tokens survive trimming as literal empty-string
/// names. Members are kept in lexicographic order so rendering is
/// deterministic.
///
/// # Example
///
/// ```
/// use profilegate_core::{ProfileSet, RuleStatus};
///
/// let set = ProfileSet::parse("dev, prod", true);
///
/// let eval = set.evaluate(&["dev"]);
/// assert!(eval.satisfied);
///
/// let eval = set.evaluate(&["dev", "prod"]);
/// assert_eq!(eval.status, RuleStatus::FailedMultipleActive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileSet {
    names: BTreeSet<String>,
    require_one: bool,
}

impl ProfileSet {
    /// Creates an empty set with `require_one` disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated profiles string into a set.
    ///
    /// Tokens are trimmed and kept as-is otherwise; an empty token stays a
    /// literal empty-string name.
    pub fn parse(profiles: &str, require_one: bool) -> Self {
        let mut set = ProfileSet::new();
        set.set_profiles(profiles);
        set.require_one = require_one;
        set
    }

    /// Replaces the member names by re-parsing `profiles`.
    pub fn set_profiles(&mut self, profiles: &str) {
        self.names = profiles
            .split(',')
            .map(|name| name.trim().to_string())
            .collect();
    }

    /// Sets whether exactly one member must be active.
    pub fn set_require_one(&mut self, require_one: bool) {
        self.require_one = require_one;
    }

    /// The declared member names, in lexicographic order.
    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Whether exactly one member must be active.
    pub fn require_one(&self) -> bool {
        self.require_one
    }

    /// Evaluates this set against an active-profile snapshot.
    ///
    /// Counts how many entries of `active` are members of this set
    /// (duplicate entries each count) and classifies the outcome: more than
    /// one active member always fails, and zero active members fails when
    /// `require_one` is set. Active names are compared exactly, without
    /// trimming.
    ///
    /// Pure: identical input always yields an identical [`Evaluation`].
    pub fn evaluate<S: AsRef<str>>(&self, active: &[S]) -> Evaluation {
        let count_active = active
            .iter()
            .filter(|profile| self.names.contains(profile.as_ref()))
            .count();

        let status = if count_active > 1 {
            RuleStatus::FailedMultipleActive
        } else if count_active == 0 && self.require_one {
            RuleStatus::FailedNoneActive
        } else {
            RuleStatus::Ok
        };
        Evaluation::from_status(status)
    }

    /// Renders this set with the given status for failure reports.
    ///
    /// Members appear in lexicographic order, so the output is stable for a
    /// given set and status.
    pub fn describe(&self, status: RuleStatus) -> String {
        let names = self
            .names
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "MutuallyExclusiveSet[require_one={}, profiles={{{}}}] - status: {}",
            self.require_one, names, status
        )
    }
}
