//! Float Consumer Library
//!
//! Callbacks that accept a primitive `f32` and return nothing, without boxing
//! the value into a generic consumer abstraction.
//!
//! # Architecture
//!
//! - [`FloatConsumer`] is the capability itself: one required method, `accept`
//! - [`FloatConsumer::and_then`] sequences two consumers; the second one is
//!   skipped when the first one fails
//! - [`FloatConsumerChain`] does the same for any number of boxed stages
//!   assembled at runtime
//!
//! The library does NOT:
//! - Retry, recover from or log consumer failures
//! - Interpret consumer errors (they are returned unchanged)
//! - Spawn threads or defer work; everything runs on the caller's thread
//!
//! # Example Usage
//!
//! ```
//! use float_consumer::{from_fn, infallible_fn, CallbackError, FloatConsumer};
//! use std::cell::Cell;
//!
//! let sum = Cell::new(0.0f32);
//! let check = from_fn(|v: f32| {
//!     if v.is_finite() {
//!         Ok(())
//!     } else {
//!         Err(CallbackError::new("not a finite value"))
//!     }
//! });
//!
//! let consumer = check.and_then(infallible_fn(|v| sum.set(sum.get() + v)));
//!
//! consumer.accept(1.5).unwrap();
//! assert!(consumer.accept(f32::NAN).is_err());
//! assert_eq!(sum.get(), 1.5);
//! ```

// Public modules
pub mod chain;
pub mod config;
pub mod consumer;
pub mod types;

// Re-export main types for convenience
pub use chain::FloatConsumerChain;
pub use config::ChainConfig;
pub use consumer::{
    compose, from_fn, infallible_fn, AndThen, BoxedFloatConsumer, FloatConsumer, FromFn,
    InfallibleFn,
};
pub use types::{CallbackError, ConsumerError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an empty chain is a valid consumer
        let chain: FloatConsumerChain<'_, CallbackError> = FloatConsumerChain::new();
        assert!(chain.accept(0.0).is_ok());
        assert!(!VERSION.is_empty());
    }
}
