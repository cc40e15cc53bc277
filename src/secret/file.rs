use crate::error::{Error, Result};
use crate::secret::SecretProvider;

use secrecy::{ExposeSecret, SecretString};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Secret provider backed by a password file
///
/// The file is read once, when the provider is created. Its content is used
/// verbatim, including any trailing newline, so the same file always yields the
/// same signatures.
pub struct FileSecretProvider {
    path: PathBuf,
    secret: SecretString,
}

impl FileSecretProvider {
    /// Read the secret from `path`
    ///
    /// Fails with [`Error::SecretUnavailable`] when the file does not exist or
    /// cannot be read as UTF-8 text.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::SecretUnavailable(format!(
                "Secret file not found: {}",
                path.display()
            )),
            _ => Error::SecretUnavailable(format!(
                "Failed to read secret file {}: {e}",
                path.display()
            )),
        })?;

        debug!(path = %path.display(), "Loaded secret from file");

        Ok(Self {
            path,
            secret: SecretString::new(content),
        })
    }

    /// Path the secret was read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SecretProvider for FileSecretProvider {
    fn provide_secret(&self) -> Result<SecretString> {
        Ok(SecretString::new(self.secret.expose_secret().clone()))
    }
}

impl std::fmt::Debug for FileSecretProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSecretProvider")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"s3cr3t").unwrap();

        let provider = FileSecretProvider::new(file.path()).unwrap();
        assert_eq!(provider.path(), file.path());
        assert_eq!(provider.provide_secret().unwrap().expose_secret(), "s3cr3t");
    }

    #[test]
    fn test_content_is_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"s3cr3t\n").unwrap();

        let provider = FileSecretProvider::new(file.path()).unwrap();
        assert_eq!(provider.provide_secret().unwrap().expose_secret(), "s3cr3t\n");
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("password.txt");

        let err = FileSecretProvider::new(&missing).unwrap_err();
        assert!(matches!(err, Error::SecretUnavailable(ref msg) if msg.contains("not found")));
    }

    #[test]
    fn test_debug_hides_secret() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"s3cr3t").unwrap();

        let provider = FileSecretProvider::new(file.path()).unwrap();
        assert!(!format!("{provider:?}").contains("s3cr3t"));
    }
}
