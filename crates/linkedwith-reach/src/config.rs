//! Configuration for neighborhood traversal

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`ReachConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize to TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for the neighborhood engine
///
/// # Examples
///
/// ```
/// use linkedwith_reach::ReachConfig;
///
/// // Default: unbounded queries, warn on very wide frontiers
/// let config = ReachConfig::default();
/// assert_eq!(config.default_max_distance, None);
///
/// // Shallow: friends and friends of friends unless asked otherwise
/// let config = ReachConfig::shallow();
/// assert_eq!(config.default_max_distance, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachConfig {
    /// Hop bound used when a query gives none
    /// Default: None (bounded by the number of links)
    #[serde(default)]
    pub default_max_distance: Option<usize>,

    /// Frontier size above which a traversal layer is logged as a warning
    /// Default: 10000
    #[serde(default = "default_frontier_warn_threshold")]
    pub frontier_warn_threshold: usize,
}

fn default_frontier_warn_threshold() -> usize {
    10_000
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            default_max_distance: None,
            frontier_warn_threshold: default_frontier_warn_threshold(),
        }
    }
}

impl ReachConfig {
    /// Shallow preset: two hops by default, tighter frontier warnings
    pub fn shallow() -> Self {
        Self {
            default_max_distance: Some(2),
            frontier_warn_threshold: 1_000,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frontier_warn_threshold == 0 {
            return Err(ConfigError::Invalid(
                "frontier_warn_threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
