//! End-to-end checks through the public facade.

use profilegate::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn toml_declarations_enforce_end_to_end() {
    init_tracing();

    let config = RulesConfig::from_toml_str(
        r#"
        [[rules]]
        profiles = "dev, prod"
        requireOne = true

        [[rules]]
        profiles = "mysql,postgres"
        "#,
    )
    .unwrap();

    assert!(enforce(&config, &["dev", "mysql"]).is_ok());

    let violation = enforce(&config, &["dev", "prod", "mysql"]).unwrap_err();
    assert_eq!(
        violation.to_string(),
        "The following Mutually Exclusive Profile Set rule(s) failed:\n\
         \x20 MutuallyExclusiveSet[require_one=true, profiles={dev, prod}] - status: \
         Failed because more than one of the mutually exclusive profiles were active\n\
         Profiles Active were: [dev, prod, mysql]"
    );
}

#[test]
fn yaml_declarations_enforce_end_to_end() {
    init_tracing();

    let config = RulesConfig::from_yaml_str(
        r#"
        rules:
          - profiles: "dev, prod"
            requireOne: true
        "#,
    )
    .unwrap();

    let violation = enforce(&config, &[] as &[&str]).unwrap_err();
    assert!(violation
        .to_string()
        .ends_with("Profiles Active were: []"));
    assert_eq!(violation.descriptions().len(), 1);
}

#[test]
fn warned_config_still_checks_deterministically() {
    init_tracing();

    let config = RulesConfig::new().with_rule(ProfileSetConfig::new("", true));
    assert_eq!(config.validate().len(), 2);

    // The unsatisfiable declaration fails the same way on every run.
    let first = enforce(&config, &["dev"]).unwrap_err();
    let second = enforce(&config, &["dev"]).unwrap_err();
    assert_eq!(first, second);
}
