//! Token signature computation
//!
//! The signature is the unpadded Base64URL form of
//! `SHA-256(header_segment || payload_segment || secret)` over UTF-8 bytes.
//! There is no salt or nonce, so identical inputs always sign identically.
//!
//! This is a plain hash over the concatenation, not HMAC. Tokens issued by
//! existing deployments use this construction and must keep verifying.

use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// Compute the encoded signature for a header and payload segment
pub fn compute(header_b64: &str, payload_b64: &str, secret: &SecretString) -> String {
    let mut hasher = Sha256::new();
    hasher.update(header_b64.as_bytes());
    hasher.update(payload_b64.as_bytes());
    hasher.update(secret.expose_secret().as_bytes());
    base64url::encode(&hasher.finalize())
}

/// Compare an expected signature with a provided one in constant time
pub fn matches(expected: &str, provided: &str) -> bool {
    constant_time_eq(expected.as_bytes(), provided.as_bytes())
}
