//! Chain configuration types
//!
//! Settings for [`FloatConsumerChain`](crate::FloatConsumerChain). Plain
//! composition through `and_then` needs no configuration at all.

use serde::{Deserialize, Serialize};

/// Configuration for a consumer chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Label used in log output
    #[serde(default = "default_name")]
    pub name: String,

    /// Emit a trace line for every stage a value is dispatched to
    #[serde(default)]
    pub trace_invocations: bool,

    /// Optional: maximum number of stages the chain may hold
    #[serde(default)]
    pub max_stages: Option<usize>,
}

fn default_name() -> String {
    "float-chain".to_string()
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            trace_invocations: false,
            max_stages: None,
        }
    }
}

impl ChainConfig {
    /// Create a new chain configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the chain label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method: enable or disable per-stage tracing
    pub fn with_trace_invocations(mut self, enabled: bool) -> Self {
        self.trace_invocations = enabled;
        self
    }

    /// Builder method: cap the number of stages
    pub fn with_max_stages(mut self, max: usize) -> Self {
        self.max_stages = Some(max);
        self
    }

    /// Check if a chain currently holding `len` stages may take another one
    pub fn allows_stage(&self, len: usize) -> bool {
        match self.max_stages {
            Some(max) => len < max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_config_builder() {
        let config = ChainConfig::new()
            .with_name("sensor")
            .with_trace_invocations(true)
            .with_max_stages(3);

        assert_eq!(config.name, "sensor");
        assert!(config.trace_invocations);
        assert_eq!(config.max_stages, Some(3));
    }

    #[test]
    fn test_stage_limit() {
        let config = ChainConfig::new().with_max_stages(2);

        assert!(config.allows_stage(0));
        assert!(config.allows_stage(1));
        assert!(!config.allows_stage(2));

        // Without a limit, everything should pass
        assert!(ChainConfig::new().allows_stage(usize::MAX - 1));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ChainConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChainConfig::default());
        assert_eq!(config.name, "float-chain");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ChainConfig =
            serde_json::from_str(r#"{"name": "gauges", "max_stages": 4}"#).unwrap();

        assert_eq!(config.name, "gauges");
        assert!(!config.trace_invocations);
        assert_eq!(config.max_stages, Some(4));
    }
}
