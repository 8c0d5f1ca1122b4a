//! Rule engine for mutually exclusive profile checking.
//!
//! [`RuleEngine`] holds the declared [`ProfileSet`]s and checks all of them
//! against one active-profile snapshot. Checking is all-or-nothing: every
//! set is evaluated and every violation is reported together, so one
//! misconfiguration cannot hide another.
//!
//! Logging levels:
//! - **INFO**: per-set evaluation outcome
//! - **DEBUG**: check start with the active snapshot


use profilegate_core::{ProfileSet, RuleViolation};
use tracing::{debug, info};

/// Ordered collection of mutually exclusive profile sets.
///
/// Declaration order is preserved so failure reports are reproducible.
/// Construct once per check from external configuration; the engine holds no
/// cross-invocation state and checking never mutates it.
///
/// # Example
///
/// ```
/// use profilegate_core::ProfileSet;
/// use profilegate_engine::RuleEngine;
///
/// let engine = RuleEngine::new().with_set(ProfileSet::parse("dev,prod", true));
///
/// assert!(engine.check_all(&["dev"]).is_ok());
/// assert!(engine.check_all(&["dev", "prod"]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    sets: Vec<ProfileSet>,
}

impl RuleEngine {
    /// Creates an engine with no sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a set, keeping declaration order.
    pub fn add_set(&mut self, set: ProfileSet) {
        self.sets.push(set);
    }

    /// Builder-style [`add_set`](Self::add_set).
    pub fn with_set(mut self, set: ProfileSet) -> Self {
        self.sets.push(set);
        self
    }

    /// The declared sets, in order.
    pub fn sets(&self) -> &[ProfileSet] {
        &self.sets
    }

    /// Checks every declared set against one active-profile snapshot.
    ///
    /// Evaluates all sets even after the first violation and aggregates
    /// every failure into a single [`RuleViolation`] whose message lists the
    /// failing sets in declaration order, followed by the literal snapshot.
    pub fn check_all<S: AsRef<str>>(&self, active: &[S]) -> Result<(), RuleViolation> {
        let active: Vec<&str> = active.iter().map(AsRef::as_ref).collect();
        debug!(
            event = "check_start",
            set_count = self.sets.len(),
            active = ?active,
        );

        let mut failures = Vec::new();
        for set in &self.sets {
            let evaluation = set.evaluate(&active);
            let description = set.describe(evaluation.status);
            info!(
                event = "set_evaluated",
                satisfied = evaluation.satisfied,
                set = %description,
            );
            if !evaluation.satisfied {
                failures.push(description);
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RuleViolation::new(
                failures,
                active.iter().map(|profile| profile.to_string()).collect(),
            ))
        }
    }
}

impl From<Vec<ProfileSet>> for RuleEngine {
    fn from(sets: Vec<ProfileSet>) -> Self {
        RuleEngine { sets }
    }
}

impl FromIterator<ProfileSet> for RuleEngine {
    fn from_iter<I: IntoIterator<Item = ProfileSet>>(iter: I) -> Self {
        RuleEngine {
            sets: iter.into_iter().collect(),
        }
    }
}
