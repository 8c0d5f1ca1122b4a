//! Profilegate - mutually exclusive profile checking for build configurations
//!
//! Declare groups of build profiles that must not be active together, then
//! check an active-profile snapshot against every declaration at once. A
//! failed check reports every violated declaration, not just the first.
//!
//! # Example
//!
//! ```
//! use profilegate::prelude::*;
//!
//! let config = RulesConfig::from_toml_str(r#"
//!     [[rules]]
//!     profiles = "dev, prod"
//!     requireOne = true
//! "#).unwrap();
//!
//! assert!(enforce(&config, &["dev"]).is_ok());
//!
//! let err = enforce(&config, &["dev", "prod"]).unwrap_err();
//! assert!(err.to_string().contains("Mutually Exclusive Profile Set"));
//! ```

mod enforce;

pub use enforce::enforce;

pub use profilegate_config::{ConfigError, ConfigWarning, ProfileSetConfig, RulesConfig};
pub use profilegate_core::{Evaluation, ProfileSet, RuleStatus, RuleViolation};
pub use profilegate_engine::RuleEngine;

pub mod prelude {
    pub use super::{
        enforce, ProfileSet, ProfileSetConfig, RuleEngine, RuleStatus, RuleViolation, RulesConfig,
    };
}
