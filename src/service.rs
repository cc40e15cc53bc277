//! Token issuance and verification
//!
//! [`TokenService`] holds the shared secret and runs both directions of the
//! protocol:
//!
//! ```text
//! issue:   payload ─▶ JSON ─▶ Base64URL ─┐
//!          fixed header ─▶ Base64URL ────┼─▶ SHA-256(h ‖ p ‖ secret) ─▶ "h.p.s"
//!
//! verify:  "h.p.s" ─▶ ParsedToken ─▶ VerifiedToken ─▶ payload
//!               (split)        (signature)      (decode)
//! ```
//!
//! The secret is read from the provider once, in [`TokenService::new`]. The
//! service is immutable afterwards and can be cloned and shared across threads.

use crate::error::{Error, Result};
use crate::secret::SecretProvider;
use crate::signature;
use crate::token::{ParsedToken, TokenHeader, VerifiedToken};
use crate::utils::base64url;

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{debug, warn};

/// Issues and verifies signed tokens
///
/// The service is configured once and can be reused for any number of tokens.
/// The payload type is chosen per call.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<SecretString>,
    config_max_token_length: Option<usize>,
    config_max_payload_size: Option<usize>,
}

impl TokenService {
    /// Create a service with the secret supplied by `provider`
    ///
    /// The provider is called exactly once. An empty secret is rejected with
    /// [`Error::SecretUnavailable`].
    pub fn new<P>(provider: &P) -> Result<Self>
    where
        P: SecretProvider + ?Sized,
    {
        let secret = provider.provide_secret()?;
        if secret.expose_secret().is_empty() {
            return Err(Error::SecretUnavailable("Secret is empty".into()));
        }

        Ok(Self {
            secret: Arc::new(secret),
            config_max_token_length: None,
            config_max_payload_size: None,
        })
    }

    /// Configure the maximum token length in bytes
    ///
    /// Unbounded unless set. Applies to both directions: longer tokens are
    /// never issued, and are rejected after splitting but before the signature
    /// is computed.
    pub fn max_token_length(&mut self, max: usize) -> &mut Self {
        self.config_max_token_length = Some(max);
        self
    }

    /// Configure the maximum decoded payload size in bytes
    ///
    /// Unbounded unless set.
    pub fn max_payload_size(&mut self, max: usize) -> &mut Self {
        self.config_max_payload_size = Some(max);
        self
    }

    /// Finish configuration
    pub fn build(&mut self) -> Self {
        self.clone()
    }
}

impl TokenService {
    /// Issue a token for `payload`
    ///
    /// Identical payloads issued by services sharing a secret produce identical
    /// tokens.
    pub fn issue<T>(&self, payload: &T) -> Result<String>
    where
        T: miniserde::Serialize + ?Sized,
    {
        let payload_json = miniserde::json::to_string(payload);

        let header_b64 = TokenHeader::encoded_segment();
        let payload_b64 = base64url::encode_str(&payload_json);
        let signature_b64 = signature::compute(&header_b64, &payload_b64, &self.secret);

        let token = format!("{header_b64}.{payload_b64}.{signature_b64}");
        self.check_token_length(&token)?;

        debug!(token_len = token.len(), "Issued token");
        Ok(token)
    }

    /// Verify a token and decode its payload as `T`
    ///
    /// The signature is checked before anything is decoded. Any error means
    /// the token must not be trusted.
    pub fn verify<T>(&self, token: &str) -> Result<T>
    where
        T: miniserde::Deserialize,
    {
        self.verified(token)
            .and_then(|verified| verified.decode_payload::<T>())
            .inspect(|_| debug!(token_len = token.len(), "Verified token"))
            .inspect_err(|e| warn!(error = %e, token_len = token.len(), "Rejected token"))
    }

    /// Verify a token and decode its payload as an untyped JSON value
    pub fn verify_value(&self, token: &str) -> Result<miniserde::json::Value> {
        self.verify::<miniserde::json::Value>(token)
    }

    /// Run the split and signature stages
    fn verified<'a>(&self, token: &'a str) -> Result<VerifiedToken<'a>> {
        let parsed = ParsedToken::from_string(token)?;
        self.check_token_length(token)?;

        let mut verified = parsed.verify_signature(&self.secret)?;
        if let Some(max) = self.config_max_payload_size {
            verified = verified.with_max_payload_size(max);
        }

        verified.header()?.ensure_algorithm()?;

        Ok(verified)
    }

    fn check_token_length(&self, token: &str) -> Result<()> {
        match self.config_max_token_length {
            Some(max) if token.len() > max => Err(Error::TokenTooLarge {
                size: token.len(),
                max,
            }),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("max_token_length", &self.config_max_token_length)
            .field("max_payload_size", &self.config_max_payload_size)
            .finish_non_exhaustive()
    }
}
