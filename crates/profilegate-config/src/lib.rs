//! Configuration loading for profilegate rules.
//!
//! Load mutually-exclusive-profile declarations from TOML or YAML documents
//! without code changes. The persisted shape of one declaration is
//! `{ profiles = "<comma-separated names>", requireOne = <bool> }`.
//!
//! # Examples
//!
//! Load declarations from a TOML string:
//!
//! ```
//! use profilegate_config::RulesConfig;
//!
//! let config = RulesConfig::from_toml_str(r#"
//!     [[rules]]
//!     profiles = "dev, prod"
//!     requireOne = true
//!
//!     [[rules]]
//!     profiles = "mysql, postgres"
//! "#).unwrap();
//!
//! assert_eq!(config.rules.len(), 2);
//! assert!(config.rules[0].require_one);
//! ```
//!
//! Use default (empty) config when the file is missing:
//!
//! ```
//! use profilegate_config::RulesConfig;
//!
//! let config = RulesConfig::load("profiles.toml").unwrap_or_default();
//! // Proceeds with no declarations if the file doesn't exist
//! ```


use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use profilegate_core::ProfileSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Top-level rule configuration: an ordered list of declarations.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Mutually exclusive set declarations, in declaration order.
    #[serde(default)]
    pub rules: Vec<ProfileSetConfig>,
}

impl RulesConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a declaration.
    pub fn with_rule(mut self, rule: ProfileSetConfig) -> Self {
        self.rules.push(rule);
        self
    }

    /// Converts every declaration into a [`ProfileSet`], preserving order.
    pub fn to_sets(&self) -> Vec<ProfileSet> {
        self.rules.iter().map(ProfileSetConfig::to_set).collect()
    }

    /// Lints the declarations without affecting checking semantics.
    ///
    /// Returns one warning per finding; an empty vector means a clean
    /// config. A warned config still checks deterministically — a
    /// `requireOne` declaration with no usable names simply never passes.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        for (rule_index, rule) in self.rules.iter().enumerate() {
            let tokens: Vec<&str> = rule.profiles.split(',').map(str::trim).collect();

            if tokens.iter().any(|token| token.is_empty()) {
                warnings.push(ConfigWarning::EmptyName { rule_index });
            }
            if rule.require_one && tokens.iter().all(|token| token.is_empty()) {
                warnings.push(ConfigWarning::RequireOneNeverSatisfiable { rule_index });
            }

            let mut seen = BTreeSet::new();
            for token in tokens.iter().filter(|token| !token.is_empty()) {
                if !seen.insert(*token) {
                    warnings.push(ConfigWarning::DuplicateName {
                        rule_index,
                        name: token.to_string(),
                    });
                }
            }
        }
        warnings
    }
}

/// One mutually exclusive set declaration.
///
/// Serialized in camelCase, so the persisted key for `require_one` is
/// `requireOne`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSetConfig {
    /// Comma-separated profile names.
    pub profiles: String,

    /// Whether exactly one of the profiles must be active.
    #[serde(default)]
    pub require_one: bool,
}

impl ProfileSetConfig {
    /// Creates a declaration.
    pub fn new(profiles: impl Into<String>, require_one: bool) -> Self {
        ProfileSetConfig {
            profiles: profiles.into(),
            require_one,
        }
    }

    /// Parses this declaration into a [`ProfileSet`].
    pub fn to_set(&self) -> ProfileSet {
        ProfileSet::parse(&self.profiles, self.require_one)
    }
}

/// Non-blocking configuration finding from [`RulesConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A declaration contains a token that is empty after trimming.
    EmptyName {
        /// Index of the declaration in `rules`.
        rule_index: usize,
    },
    /// `requireOne` is set on a declaration with no non-empty names, so the
    /// rule can never pass.
    RequireOneNeverSatisfiable {
        /// Index of the declaration in `rules`.
        rule_index: usize,
    },
    /// A trimmed name appears more than once within one declaration.
    DuplicateName {
        /// Index of the declaration in `rules`.
        rule_index: usize,
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::EmptyName { rule_index } => {
                write!(f, "rule {rule_index}: empty profile name after trimming")
            }
            ConfigWarning::RequireOneNeverSatisfiable { rule_index } => {
                write!(
                    f,
                    "rule {rule_index}: requireOne is set but the declaration has no non-empty profile names"
                )
            }
            ConfigWarning::DuplicateName { rule_index, name } => {
                write!(f, "rule {rule_index}: duplicate profile name \"{name}\"")
            }
        }
    }
}
