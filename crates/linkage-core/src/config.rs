//! Comparator configuration
//!
//! Values arrive either as typed structs, as JSON, or as string-keyed
//! properties assembled by a matching pipeline's configuration layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LinkageError, Result};

/// Default minimum length of a common substring that counts toward the score
pub const DEFAULT_MINIMUM_LENGTH: usize = 2;

/// Configuration for the longest common substring comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LcsConfig {
    /// Shortest common substring that is extracted and counted (default: 2)
    #[serde(rename = "minimum-length", alias = "minimum_length")]
    pub minimum_length: usize,
}

impl Default for LcsConfig {
    fn default() -> Self {
        Self {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
        }
    }
}

impl LcsConfig {
    pub fn builder() -> LcsConfigBuilder {
        LcsConfigBuilder::default()
    }

    /// Reject configurations the comparator cannot run with.
    ///
    /// A minimum length of zero would let an empty match "succeed" forever.
    pub fn validate(&self) -> Result<()> {
        if self.minimum_length == 0 {
            return Err(LinkageError::InvalidMinimumLength(0));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration object.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LcsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Assign a single string-keyed property.
    ///
    /// The configuration is left untouched when the name or value is rejected.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "minimum-length" | "minimum_length" => {
                let parsed: i64 = value.trim().parse().map_err(|_| LinkageError::InvalidProperty {
                    name: name.to_string(),
                    value: value.to_string(),
                })?;
                self.minimum_length = check_minimum_length(parsed)?;
                debug!(minimum_length = self.minimum_length, "property set");
                Ok(())
            }
            _ => Err(LinkageError::UnknownProperty(name.to_string())),
        }
    }
}

/// Validate a raw minimum length, converting it to `usize`
fn check_minimum_length(value: i64) -> Result<usize> {
    if value < 1 {
        return Err(LinkageError::InvalidMinimumLength(value));
    }
    usize::try_from(value).map_err(|_| LinkageError::InvalidMinimumLength(value))
}

/// Builder for [`LcsConfig`]
#[derive(Debug, Default)]
pub struct LcsConfigBuilder {
    minimum_length: Option<usize>,
}

impl LcsConfigBuilder {
    pub fn minimum_length(mut self, minimum_length: usize) -> Self {
        self.minimum_length = Some(minimum_length);
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<LcsConfig> {
        let config = LcsConfig {
            minimum_length: self.minimum_length.unwrap_or(DEFAULT_MINIMUM_LENGTH),
        };
        config.validate()?;
        Ok(config)
    }
}
