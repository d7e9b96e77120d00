//! Error types for the bridge facade.

use thiserror::Error;

/// Errors surfaced by the legacy facade.
///
/// The facade itself has a single failure mode: calls that would mutate
/// logger hierarchy or level configuration, both of which the backend owns
/// exclusively. Level mapping and logging never fail.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The operation is part of the legacy surface but not of the bridge.
    #[error("'{operation}' is not supported: the backend owns logger hierarchy and level configuration")]
    Unsupported {
        /// Name of the rejected facade operation.
        operation: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_names_the_operation() {
        let err = BridgeError::Unsupported {
            operation: "set_level",
        };
        let message = err.to_string();
        assert!(message.contains("set_level"));
        assert!(message.contains("not supported"));
    }
}
