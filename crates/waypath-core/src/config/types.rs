//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

/// waypath configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (the `--format` flag takes precedence)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Graph handling configuration
    #[serde(default)]
    pub graph: GraphConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Configuration for graph loading and validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Reject negative edge weights before running shortest-path queries
    #[serde(default = "default_validate_weights")]
    pub validate_weights: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            validate_weights: default_validate_weights(),
        }
    }
}

fn default_validate_weights() -> bool {
    true
}

/// Configuration for structured logging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level (the `--log-level` flag takes precedence)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}
