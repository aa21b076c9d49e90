//! Runtime-built consumer chains
//!
//! `and_then` fixes the shape of a composition at compile time. A
//! [`FloatConsumerChain`] holds any number of boxed stages instead, appended
//! one at a time, and runs them with the same ordering and short-circuit rules.

use crate::config::ChainConfig;
use crate::consumer::{BoxedFloatConsumer, FloatConsumer};
use crate::types::{ConsumerError, Result};
use std::fmt;

/// Ordered sequence of consumers sharing one error type
pub struct FloatConsumerChain<'a, E> {
    config: ChainConfig,
    stages: Vec<BoxedFloatConsumer<'a, E>>,
}

impl<'a, E> FloatConsumerChain<'a, E> {
    /// Create an empty chain with default settings
    pub fn new() -> Self {
        Self::with_config(ChainConfig::default())
    }

    /// Create an empty chain with the given settings
    pub fn with_config(config: ChainConfig) -> Self {
        log::debug!("Creating consumer chain '{}'", config.name);
        Self {
            config,
            stages: Vec::new(),
        }
    }

    /// Append a stage to the end of the chain
    ///
    /// # Returns
    /// * `Result<&mut Self>` - Err with `InvalidArgument` if the configured
    ///   `max_stages` would be exceeded; the chain keeps its existing stages
    pub fn then<C>(&mut self, stage: C) -> Result<&mut Self>
    where
        C: FloatConsumer<Error = E> + Send + Sync + 'a,
    {
        if !self.config.allows_stage(self.stages.len()) {
            return Err(ConsumerError::InvalidArgument(format!(
                "chain '{}' is limited to {} stages",
                self.config.name,
                self.stages.len()
            )));
        }

        self.stages.push(stage.boxed());
        log::debug!(
            "Chain '{}' now has {} stage(s)",
            self.config.name,
            self.stages.len()
        );
        Ok(self)
    }

    /// Append a stage that may be absent
    pub fn try_then<C>(&mut self, stage: Option<C>) -> Result<&mut Self>
    where
        C: FloatConsumer<Error = E> + Send + Sync + 'a,
    {
        let stage = stage.ok_or_else(|| ConsumerError::missing("stage"))?;
        self.then(stage)
    }

    /// Number of stages in the chain
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the chain has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Settings this chain was built with
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

impl<E> Default for FloatConsumerChain<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for FloatConsumerChain<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatConsumerChain")
            .field("config", &self.config)
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl<E> FloatConsumer for FloatConsumerChain<'_, E> {
    type Error = E;

    fn accept(&self, value: f32) -> std::result::Result<(), E> {
        for (index, stage) in self.stages.iter().enumerate() {
            if self.config.trace_invocations {
                log::trace!(
                    "Chain '{}': stage {} accepting {}",
                    self.config.name,
                    index,
                    value
                );
            }
            stage.accept(value)?;
        }
        Ok(())
    }
}
