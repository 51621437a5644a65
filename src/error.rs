//! Custom error types for ffgp-convert
//!
//! This module defines the error hierarchy for the converter using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source container could not be decrypted (bad framing or cipher failure)
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Decrypted bytes are not a valid source checklist document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Destination cipher rejected its input
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Destination packaging failed
    ///
    /// Reserved for the archive-wrapping step of the destination format,
    /// which is not implemented yet (see `convert::packager`).
    #[error("Packaging error: {0}")]
    Packaging(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ConvertError {
    /// Check if this is a decryption error
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::Decryption("ciphertext too short".into());
        assert_eq!(err.to_string(), "Decryption error: ciphertext too short");
    }

    #[test]
    fn test_error_predicates() {
        assert!(ConvertError::Decryption("x".into()).is_decryption());
        assert!(ConvertError::Parse("x".into()).is_parse());
        assert!(!ConvertError::Parse("x".into()).is_decryption());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let convert_err: ConvertError = io_err.into();
        assert!(matches!(convert_err, ConvertError::Io(_)));
    }
}
