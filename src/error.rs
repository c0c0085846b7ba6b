//! Error handling module for rotorsim
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All fallible engine operations return these types for consistency.
//!
//! Construction-time invariant violations (`InvalidWiring`,
//! `InvalidReflector`) are fatal to the operation that triggered them: a
//! broken permutation would silently corrupt every subsequent symbol.
//! Plugboard pairing problems are deliberately NOT here — they are
//! warning-level diagnostics (`plugboard::PlugWarning`) because the lenient
//! historical UIs recovered from them by dropping the offending pair.

use thiserror::Error;

/// Main error type for the rotorsim engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A supplied permutation table is not a bijection over the alphabet
    #[error("invalid wiring: {0}")]
    InvalidWiring(String),

    /// A reflector table has a fixed point or is not an involution
    #[error("invalid reflector: {0}")]
    InvalidReflector(String),

    /// A model tag that no registry entry matches
    #[error("unknown machine model: {0}")]
    UnknownModel(String),

    /// A rotor/reflector selection outside a model's inventory
    /// (always a hard failure, never clamped)
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),

    /// Decode of a corrupt or foreign encoded state integer
    #[error("malformed encoded state: {0}")]
    MalformedEncodedState(String),

    /// A symbol outside the machine alphabet reached the engine
    #[error("symbol {0:?} is not in the machine alphabet")]
    InvalidSymbol(char),
}

/// Result type alias for rotorsim operations
pub type Result<T> = std::result::Result<T, EnigmaError>;

// Convenient error constructors
impl EnigmaError {
    /// Create an invalid-wiring error
    pub fn invalid_wiring(msg: impl Into<String>) -> Self {
        Self::InvalidWiring(msg.into())
    }

    /// Create an invalid-reflector error
    pub fn invalid_reflector(msg: impl Into<String>) -> Self {
        Self::InvalidReflector(msg.into())
    }

    /// Create an unknown-model error
    pub fn unknown_model(msg: impl Into<String>) -> Self {
        Self::UnknownModel(msg.into())
    }

    /// Create an index-out-of-range error
    pub fn index_out_of_range(msg: impl Into<String>) -> Self {
        Self::IndexOutOfRange(msg.into())
    }

    /// Create a malformed-encoded-state error
    pub fn malformed_state(msg: impl Into<String>) -> Self {
        Self::MalformedEncodedState(msg.into())
    }

    /// Create an invalid-symbol error
    pub fn invalid_symbol(c: char) -> Self {
        Self::InvalidSymbol(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnigmaError::unknown_model("Z99");
        assert_eq!(err.to_string(), "unknown machine model: Z99");

        let err = EnigmaError::invalid_symbol('ß');
        assert_eq!(err.to_string(), "symbol 'ß' is not in the machine alphabet");
    }

    #[test]
    fn test_error_constructors() {
        let err = EnigmaError::invalid_wiring("duplicate contact");
        assert!(matches!(err, EnigmaError::InvalidWiring(_)));

        let err = EnigmaError::index_out_of_range("rotor 9 of 5");
        assert!(matches!(err, EnigmaError::IndexOutOfRange(_)));
    }
}
