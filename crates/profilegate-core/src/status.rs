//! Evaluation outcomes for mutually exclusive profile sets.

use std::fmt;

/// Outcome classification for one mutually exclusive set.
///
/// `Untested` is the default before any evaluation;
/// [`ProfileSet::evaluate`](crate::ProfileSet::evaluate) never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleStatus {
    /// The set has not been evaluated yet.
    #[default]
    Untested,
    /// More than one of the mutually exclusive profiles was active.
    FailedMultipleActive,
    /// None of the profiles was active although one was required.
    FailedNoneActive,
    /// The set is satisfied.
    Ok,
}

impl RuleStatus {
    /// Returns true for either failure variant.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            RuleStatus::FailedMultipleActive | RuleStatus::FailedNoneActive
        )
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RuleStatus::Untested => "Untested",
            RuleStatus::FailedMultipleActive => {
                "Failed because more than one of the mutually exclusive profiles were active"
            }
            RuleStatus::FailedNoneActive => {
                "Failed because none of the mutually exclusive profiles were active and you specified that one was required"
            }
            RuleStatus::Ok => "OK",
        };
        f.write_str(text)
    }
}

/// Result of evaluating one [`ProfileSet`](crate::ProfileSet) against an
/// active-profile snapshot.
///
/// Evaluation returns this value instead of mutating the set, so sets stay
/// freely shareable between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Status classification.
    pub status: RuleStatus,
    /// True iff the set's constraint holds.
    pub satisfied: bool,
}

impl Evaluation {
    pub(crate) fn from_status(status: RuleStatus) -> Self {
        Evaluation {
            status,
            satisfied: status == RuleStatus::Ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_untested() {
        assert_eq!(RuleStatus::default(), RuleStatus::Untested);
    }

    #[test]
    fn test_failure_classification() {
        assert!(RuleStatus::FailedMultipleActive.is_failure());
        assert!(RuleStatus::FailedNoneActive.is_failure());
        assert!(!RuleStatus::Ok.is_failure());
        assert!(!RuleStatus::Untested.is_failure());
    }

    #[test]
    fn test_display_phrases() {
        assert_eq!(RuleStatus::Ok.to_string(), "OK");
        assert_eq!(RuleStatus::Untested.to_string(), "Untested");
        assert!(RuleStatus::FailedMultipleActive
            .to_string()
            .contains("more than one"));
        assert!(RuleStatus::FailedNoneActive
            .to_string()
            .contains("one was required"));
    }

    #[test]
    fn test_satisfied_tracks_status() {
        assert!(Evaluation::from_status(RuleStatus::Ok).satisfied);
        assert!(!Evaluation::from_status(RuleStatus::FailedMultipleActive).satisfied);
        assert!(!Evaluation::from_status(RuleStatus::FailedNoneActive).satisfied);
    }
}
