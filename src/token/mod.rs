// Internal modules
mod header;
mod parsed;
mod verified;

// Public API exports
pub use header::{ALGORITHM, TOKEN_TYPE, TokenHeader};
pub use parsed::ParsedToken;
pub use verified::VerifiedToken;
