//! Module options

use kurry_types::Environment;
use thiserror::Error;

/// Overrides whether arguments are type checked
pub const CHECK_TYPES_VAR: &str = "KURRY_CHECK_TYPES";

/// Deployment mode; `production` disables checking unless overridden
pub const ENV_VAR: &str = "KURRY_ENV";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: `{value}` (expected 1, true, yes, on, 0, false, no or off)")]
    InvalidToggle { var: &'static str, value: String },
}

/// Decided once, when a module is created
#[derive(Clone)]
pub struct Options {
    pub check_types: bool,
    pub env: Environment,
}

impl Options {
    pub fn new(check_types: bool, env: Environment) -> Self {
        Self { check_types, env }
    }

    /// Read the checking toggle from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let check_types = match lookup(CHECK_TYPES_VAR) {
            Some(value) => parse_toggle(CHECK_TYPES_VAR, &value)?,
            None => !lookup(ENV_VAR).is_some_and(|mode| mode.trim() == "production"),
        };
        Ok(Self {
            check_types,
            env: Environment::default(),
        })
    }

    pub fn with_check_types(mut self, check_types: bool) -> Self {
        self.check_types = check_types;
        self
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(true, Environment::default())
    }
}

fn parse_toggle(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidToggle {
            var,
            value: value.to_string(),
        }),
    }
}
