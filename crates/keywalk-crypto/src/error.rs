//! Error types for DUKPT operations

use thiserror::Error;

/// Errors from key derivation and serial handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DukptError {
    /// Key material has the wrong length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Key serial number has the wrong length
    #[error("invalid serial length: expected {expected}, got {actual}")]
    InvalidSerialLength {
        /// Expected serial length in bytes
        expected: usize,
        /// Actual serial length in bytes
        actual: usize,
    },

    /// Transaction counter cannot advance past its 21-bit range
    #[error("transaction counter exhausted at {counter}")]
    CounterExhausted {
        /// Counter value when exhaustion was detected
        counter: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DukptError::InvalidKeyLength { expected: 16, actual: 17 };
        assert_eq!(err.to_string(), "invalid key length: expected 16, got 17");

        let err = DukptError::CounterExhausted { counter: 0x1F_FFFF };
        assert_eq!(err.to_string(), "transaction counter exhausted at 2097151");
    }
}
