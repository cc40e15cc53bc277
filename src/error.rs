//! Errors for sigtoken

use thiserror::Error;

/// Errors that can occur while issuing or verifying tokens
///
/// Any error returned from verification means the token must not be trusted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: expected three non-empty parts separated by '.'")]
    MalformedToken,

    #[error("Base64URL decoding failed: {0}")]
    Decode(String),

    #[error("Payload decoding failed: {0}")]
    PayloadDecode(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature does not match token contents")]
    SignatureMismatch,

    #[error("Algorithm '{0}' does not match the signing scheme (expected 'HS256')")]
    AlgorithmMismatch(String),

    // ============================================================================
    // Secret Errors
    // ============================================================================
    #[error("Secret unavailable: {0}")]
    SecretUnavailable(String),
}

/// Result type alias for sigtoken operations
pub type Result<T> = std::result::Result<T, Error>;
