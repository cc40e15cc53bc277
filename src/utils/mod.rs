pub mod base64url;

pub use base64url::{decode, decode_string, encode, encode_str, restore_padding};
