//! # sigtoken - Compact Signed Tokens
//!
//! Issues and verifies `header.payload.signature` tokens carrying an arbitrary
//! structured payload, signed with a shared secret.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sigtoken::*;
//!
//! let service = TokenService::new(&FileSecretProvider::new("/etc/app/password")?)?;
//!
//! let token = service.issue(&session)?;
//! let session: Session = service.verify(&token)?;
//! ```
//!
//! ## Wire Format
//!
//! ```text
//! base64url(header_json) . base64url(payload_json) . base64url(sha256)
//! ```
//!
//! All three segments are unpadded. The header is always
//! `{"alg":"HS256","typ":"JWT"}`. The signature is
//! `SHA-256(header_segment ‖ payload_segment ‖ secret)`, a plain hash over the
//! concatenation rather than HMAC, which keeps existing tokens verifiable.
//!
//! ## Verification Flow
//!
//! ```text
//! &str
//!     │ ParsedToken::from_string()      MalformedToken
//!     ▼
//! ParsedToken (split; nothing decoded)
//!     │ .verify_signature()             SignatureMismatch
//!     ▼
//! VerifiedToken (signature matches)
//!     │ .decode_payload::<T>()          Decode / PayloadDecode
//!     ▼
//! T
//! ```
//!
//! [`TokenService::verify`] runs all stages. A token whose signature does not
//! match never has its payload decoded.
//!
//! ## Security
//!
//! Signatures are compared in constant time via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate. The
//! secret is held in a [`secrecy::SecretString`] and never logged.

// Core modules
mod error;
pub(crate) mod limits;
pub mod utils;

// Signing
pub mod secret;
pub mod signature;

// Token types
pub mod token;

// Service (main public API)
mod service;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use error::{Error, Result};
pub use secret::{EnvSecretProvider, FileSecretProvider, SecretProvider};
pub use service::TokenService;
pub use token::{ParsedToken, TokenHeader, VerifiedToken};

pub use secrecy::SecretString;
