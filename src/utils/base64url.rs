//! Base64URL encoding/decoding per RFC 4648
//!
//! Segments travel without `=` padding. Encoding strips it; decoding restores it
//! with the modular rule before handing the text to the `base64` crate's padded
//! URL-safe engine.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE};

const PAD: char = '=';

/// Encode bytes to unpadded Base64URL
pub fn encode(input: &[u8]) -> String {
    let mut encoded = URL_SAFE.encode(input);
    let unpadded_len = encoded.trim_end_matches(PAD).len();
    encoded.truncate(unpadded_len);
    encoded
}

/// Encode the UTF-8 bytes of a string to unpadded Base64URL
pub fn encode_str(input: &str) -> String {
    encode(input.as_bytes())
}

/// Append the `=` characters stripped during encoding
///
/// Adds `(4 - len % 4) % 4` characters. A length of `1 (mod 4)` cannot come
/// out of an encoder; it gets three characters here and fails in the decoder.
pub fn restore_padding(input: &str) -> String {
    let missing = (4 - input.len() % 4) % 4;
    let mut padded = String::with_capacity(input.len() + missing);
    padded.push_str(input);
    padded.extend(std::iter::repeat_n(PAD, missing));
    padded
}

/// Decode unpadded Base64URL text to bytes
pub fn decode(input: &str) -> Result<Vec<u8>> {
    if input.contains(PAD) {
        return Err(Error::Decode(
            "unexpected padding in unpadded segment".to_string(),
        ));
    }

    URL_SAFE
        .decode(restore_padding(input))
        .map_err(|e| Error::Decode(format!("Base64URL decode failed: {e}")))
}

/// Decode unpadded Base64URL text to a UTF-8 string
pub fn decode_string(input: &str) -> Result<String> {
    decode(input).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::Decode(format!("Invalid UTF-8: {e}")))
    })
}

/// Decode with an upper bound on the decoded size
///
/// The bound is checked against the encoded length first so oversized input is
/// rejected without allocating the decoded buffer.
pub(crate) fn decode_string_limited(input: &str, max_size: usize) -> Result<String> {
    let estimated = input.len() / 4 * 3 + (input.len() % 4).saturating_sub(1);
    if estimated > max_size {
        return Err(Error::Decode(format!(
            "Decoded size exceeds limit: {estimated} bytes (max: {max_size})"
        )));
    }

    decode_string(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg");
        assert_eq!(encode(b"fooba"), "Zm9vYmE");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_encode_header() {
        assert_eq!(
            encode_str(r#"{"alg":"HS256","typ":"JWT"}"#),
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"
        );
    }

    #[test]
    fn test_url_safe_characters() {
        let encoded = encode(&[0xfb, 0xff, 0xfe]);
        assert_eq!(encoded, "-__-");
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn test_restore_padding() {
        assert_eq!(restore_padding(""), "");
        assert_eq!(restore_padding("Zg"), "Zg==");
        assert_eq!(restore_padding("Zm8"), "Zm8=");
        assert_eq!(restore_padding("Zm9v"), "Zm9v");
        assert_eq!(restore_padding("Zm9vY"), "Zm9vY===");
    }

    #[test]
    fn test_decode_restores_every_length() {
        // Every remainder of the byte length mod 3 produces a different padding count
        let input: Vec<u8> = (0u8..=255).collect();
        for len in 0..input.len() {
            let bytes = &input[..len];
            assert_eq!(decode(&encode(bytes)).unwrap(), bytes, "length {len}");
        }
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(decode("!!!"), Err(Error::Decode(_))));
        assert!(matches!(decode("A"), Err(Error::Decode(_))));
        assert!(matches!(decode("Zm9vY"), Err(Error::Decode(_))));
        // Standard alphabet characters are not part of Base64URL
        assert!(matches!(decode("+/+/"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_padding() {
        assert!(matches!(decode("SGVsbG8="), Err(Error::Decode(_))));
        assert_eq!(decode("SGVsbG8").unwrap(), b"Hello");
    }

    #[test]
    fn test_decode_string_invalid_utf8() {
        let encoded = encode(&[0xff, 0xfe, 0xfd]);
        assert!(matches!(decode_string(&encoded), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_string_limited() {
        assert_eq!(decode_string_limited("SGVsbG8", 5).unwrap(), "Hello");
        assert!(matches!(
            decode_string_limited("SGVsbG8", 4),
            Err(Error::Decode(_))
        ));
        assert_eq!(decode_string_limited("", 0).unwrap(), "");
    }
}
