//! Secret providers
//!
//! A [`SecretProvider`] is asked for the signing secret exactly once, when a
//! [`TokenService`](crate::TokenService) is constructed. Where the secret comes
//! from is up to the provider:
//!
//! - [`FileSecretProvider`] reads a password file
//! - [`EnvSecretProvider`] reads an environment variable
//! - [`SecretString`] itself provides an in-memory secret

mod env;
mod file;

pub use env::EnvSecretProvider;
pub use file::FileSecretProvider;

use crate::error::Result;
use secrecy::{ExposeSecret, SecretString};

/// Source of the shared signing secret
pub trait SecretProvider {
    /// Return the secret
    ///
    /// Fails with [`Error::SecretUnavailable`](crate::Error::SecretUnavailable)
    /// when the source cannot supply one.
    fn provide_secret(&self) -> Result<SecretString>;
}

impl SecretProvider for SecretString {
    fn provide_secret(&self) -> Result<SecretString> {
        Ok(SecretString::new(self.expose_secret().clone()))
    }
}
