use crate::error::{Error, Result};
use crate::limits::MAX_DECODED_HEADER_SIZE;
use crate::token::TokenHeader;
use crate::utils::base64url;

/// A token whose signature has been verified
///
/// This is the second stage in the verification pipeline.
/// At this stage:
/// - The token has been split
/// - The signature matches the header and payload segments
/// - The segments can now be safely decoded
pub struct VerifiedToken<'a> {
    header_b64: &'a str,
    payload_b64: &'a str,
    max_payload_size: Option<usize>,
}

impl<'a> VerifiedToken<'a> {
    pub(crate) fn new(header_b64: &'a str, payload_b64: &'a str) -> Self {
        Self {
            header_b64,
            payload_b64,
            max_payload_size: None,
        }
    }

    /// Bound the decoded payload size
    pub(crate) fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.max_payload_size = Some(max_payload_size);
        self
    }

    /// Decode the signed header
    pub fn header(&self) -> Result<TokenHeader> {
        let header_json =
            base64url::decode_string_limited(self.header_b64, MAX_DECODED_HEADER_SIZE)?;
        TokenHeader::from_json(&header_json)
    }

    /// Decode the payload segment to its JSON text
    pub fn raw_payload(&self) -> Result<String> {
        match self.max_payload_size {
            Some(max) => base64url::decode_string_limited(self.payload_b64, max),
            None => base64url::decode_string(self.payload_b64),
        }
    }

    /// Decode and deserialize the payload
    ///
    /// Fails with [`Error::Decode`] when the segment is not Base64URL or not
    /// UTF-8, and with [`Error::PayloadDecode`] when the JSON does not match `T`.
    pub fn decode_payload<T>(&self) -> Result<T>
    where
        T: miniserde::Deserialize,
    {
        let payload_json = self.raw_payload()?;
        miniserde::json::from_str(&payload_json)
            .map_err(|e| Error::PayloadDecode(format!("Failed to parse payload: {e}")))
    }
}
