//! Configuration for report parsing.
//!
//! `ParseConfig` holds the literals that locate and decode the matrix block,
//! plus the switch for the permutation check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Section marker written by ezFCF ahead of the parallel approximation output.
pub const DEFAULT_MARKER: &str = "=== Reading the parallel approximation job parameters ===";

/// Placeholder ezFCF prints for overlaps below its print threshold.
pub const DEFAULT_MISSING_TOKEN: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    pub marker: String,
    #[serde(alias = "placeholder")]
    pub missing_token: String,
    #[serde(alias = "validate")]
    pub validate_permutation: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            missing_token: DEFAULT_MISSING_TOKEN.to_string(),
            validate_permutation: true,
        }
    }
}

impl ParseConfig {
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder {
            inner: ParseConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "marker" });
        }
        if self.missing_token.is_empty() {
            return Err(ConfigError::EmptyField {
                field: "missing_token",
            });
        }
        // Rows are split on whitespace, so a token containing it can never match.
        if self.missing_token.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInToken {
                value: self.missing_token.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("missing_token must not contain whitespace (got {value:?})")]
    WhitespaceInToken { value: String },
}

#[derive(Debug, Clone)]
pub struct ParseConfigBuilder {
    inner: ParseConfig,
}

impl Default for ParseConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseConfigBuilder {
    pub fn new() -> Self {
        ParseConfig::builder()
    }

    pub fn marker(mut self, value: impl Into<String>) -> Self {
        self.inner.marker = value.into();
        self
    }

    pub fn missing_token(mut self, value: impl Into<String>) -> Self {
        self.inner.missing_token = value.into();
        self
    }

    pub fn validate_permutation(mut self, value: bool) -> Self {
        self.inner.validate_permutation = value;
        self
    }

    pub fn build(self) -> Result<ParseConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
