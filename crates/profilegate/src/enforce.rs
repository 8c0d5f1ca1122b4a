//! Config-to-engine convenience entry point.

use profilegate_config::RulesConfig;
use profilegate_core::RuleViolation;
use profilegate_engine::RuleEngine;
use tracing::info;

/// Checks an active-profile snapshot against every declared set.
///
/// Builds a [`RuleEngine`] from the declarations and runs a single
/// all-or-nothing check. Returns the aggregate [`RuleViolation`] when any
/// set is violated; the host decides whether that halts the build.
pub fn enforce<S: AsRef<str>>(config: &RulesConfig, active: &[S]) -> Result<(), RuleViolation> {
    let engine: RuleEngine = config.to_sets().into_iter().collect();
    info!(
        event = "enforce",
        rule_count = engine.sets().len(),
        active_count = active.len(),
    );
    engine.check_all(active)
}

#[cfg(test)]
mod tests {
    use profilegate_config::{ProfileSetConfig, RulesConfig};

    use super::*;

    #[test]
    fn test_enforce_passes_clean_snapshot() {
        let config = RulesConfig::new().with_rule(ProfileSetConfig::new("dev,prod", true));
        assert!(enforce(&config, &["dev"]).is_ok());
    }

    #[test]
    fn test_enforce_reports_violations() {
        let config = RulesConfig::new()
            .with_rule(ProfileSetConfig::new("dev,prod", true))
            .with_rule(ProfileSetConfig::new("mysql,postgres", false));

        let violation = enforce(&config, &["staging"]).unwrap_err();
        assert_eq!(violation.descriptions().len(), 1);
        assert!(violation.descriptions()[0].contains("{dev, prod}"));
    }
}
