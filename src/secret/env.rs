use crate::error::{Error, Result};
use crate::secret::SecretProvider;

use secrecy::SecretString;
use std::env;

/// Secret provider that reads an environment variable
#[derive(Debug, Clone)]
pub struct EnvSecretProvider {
    var: String,
}

impl EnvSecretProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the environment variable
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl SecretProvider for EnvSecretProvider {
    fn provide_secret(&self) -> Result<SecretString> {
        env::var(&self.var).map(SecretString::new).map_err(|e| {
            Error::SecretUnavailable(format!("Environment variable {}: {e}", self.var))
        })
    }
}
