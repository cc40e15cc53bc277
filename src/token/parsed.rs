use crate::error::{Error, Result};
use crate::signature;
use crate::token::VerifiedToken;

use secrecy::SecretString;

/// A token that has been split but not yet verified
///
/// This is the first stage in the verification pipeline.
/// At this stage, we have:
/// - Split the token into three non-empty parts (header, payload, signature)
///
/// Nothing has been decoded. The payload only becomes reachable through
/// [`VerifiedToken`], after the signature has been checked.
#[derive(Debug, Clone, Copy)]
pub struct ParsedToken<'a> {
    header_b64: &'a str,
    payload_b64: &'a str,
    signature_b64: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Split a token string into its three segments
    ///
    /// # Example
    /// ```ignore
    /// let parsed = ParsedToken::from_string("eyJ...")?;
    /// ```
    pub fn from_string(token: &'a str) -> Result<Self> {
        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or(Error::MalformedToken)?;
        let payload_b64 = parts.next().ok_or(Error::MalformedToken)?;
        let signature_b64 = parts.next().ok_or(Error::MalformedToken)?;
        if parts.next().is_some() {
            return Err(Error::MalformedToken);
        }

        if header_b64.is_empty() || payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(Error::MalformedToken);
        }

        Ok(Self {
            header_b64,
            payload_b64,
            signature_b64,
        })
    }

    /// Encoded header segment
    pub fn header_segment(&self) -> &'a str {
        self.header_b64
    }

    /// Encoded payload segment
    ///
    /// Note: this is untrusted until the signature has been verified.
    pub fn payload_segment(&self) -> &'a str {
        self.payload_b64
    }

    /// Encoded signature segment
    pub fn signature_segment(&self) -> &'a str {
        self.signature_b64
    }

    /// Recompute the signature and move to the VerifiedToken state
    ///
    /// The comparison runs in constant time. On mismatch the token is rejected
    /// and its payload is never decoded.
    pub fn verify_signature(self, secret: &SecretString) -> Result<VerifiedToken<'a>> {
        let expected = signature::compute(self.header_b64, self.payload_b64, secret);

        if !signature::matches(&expected, self.signature_b64) {
            return Err(Error::SignatureMismatch);
        }

        Ok(VerifiedToken::new(self.header_b64, self.payload_b64))
    }
}
