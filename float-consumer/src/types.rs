//! Error types for the float consumer library
//!
//! The library itself only ever fails while *building* a composition. Failures
//! raised by user consumers during `accept` belong to the caller and travel
//! through untouched, whatever their type.

/// Result type for composition operations
pub type Result<T> = std::result::Result<T, ConsumerError>;

/// Errors raised by the library while composing consumers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsumerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConsumerError {
    pub(crate) fn missing(what: &str) -> Self {
        ConsumerError::InvalidArgument(format!("{} consumer must be present", what))
    }
}

/// General-purpose failure for consumers that don't need a dedicated error type
///
/// Nothing in this crate looks inside a `CallbackError`; it is returned to the
/// caller exactly as the failing consumer produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    /// Create a new callback error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message this error was created with
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsumerError::missing("after");
        assert_eq!(err.to_string(), "Invalid argument: after consumer must be present");

        let err = CallbackError::new("boom");
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_callback_error_equality() {
        assert_eq!(CallbackError::new("boom"), CallbackError::new("boom"));
        assert_ne!(CallbackError::new("boom"), CallbackError::new("bang"));
    }
}
