use crate::error::{Error, Result};
use crate::utils::base64url;
use miniserde::{Deserialize, Serialize};

/// Algorithm identifier written into every issued header
pub const ALGORITHM: &str = "HS256";

/// Token type written into every issued header
pub const TOKEN_TYPE: &str = "JWT";

/// Token header structure
///
/// Issued tokens always carry `{"alg":"HS256","typ":"JWT"}`. The algorithm is
/// not negotiated: it only documents the one signing scheme this crate uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: Option<String>,
}

impl TokenHeader {
    /// The header attached to every issued token
    pub fn fixed() -> Self {
        Self {
            algorithm: ALGORITHM.to_string(),
            token_type: Some(TOKEN_TYPE.to_string()),
        }
    }

    /// Encoded header segment of an issued token
    pub fn encoded_segment() -> String {
        base64url::encode_str(&miniserde::json::to_string(&Self::fixed()))
    }

    /// Parse a header from its JSON text
    pub(crate) fn from_json(json: &str) -> Result<Self> {
        miniserde::json::from_str(json)
            .map_err(|e| Error::Decode(format!("Failed to parse header: {e}")))
    }

    /// Ensure the header names the signing scheme
    pub(crate) fn ensure_algorithm(&self) -> Result<()> {
        if self.algorithm == ALGORITHM {
            Ok(())
        } else {
            Err(Error::AlgorithmMismatch(self.algorithm.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_segment() {
        assert_eq!(
            TokenHeader::encoded_segment(),
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"
        );
    }

    #[test]
    fn test_fixed_header_json() {
        assert_eq!(
            miniserde::json::to_string(&TokenHeader::fixed()),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );
    }

    #[test]
    fn test_from_json_whitespace_insensitive() {
        let header = TokenHeader::from_json("{\n\"alg\": \"HS256\",\n\"typ\": \"JWT\"\n}").unwrap();
        assert_eq!(header, TokenHeader::fixed());
        assert!(header.ensure_algorithm().is_ok());
    }

    #[test]
    fn test_ensure_algorithm_rejects_other() {
        let header = TokenHeader::from_json(r#"{"alg":"none"}"#).unwrap();
        assert_eq!(header.token_type, None);
        assert_eq!(
            header.ensure_algorithm(),
            Err(Error::AlgorithmMismatch("none".to_string()))
        );
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            TokenHeader::from_json("not json"),
            Err(Error::Decode(_))
        ));
    }
}
