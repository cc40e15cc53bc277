//! Size limits for input validation

/// Maximum size for the decoded header JSON (8KB)
/// The issued header is 27 bytes; pretty-printed variants stay well below this
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;
