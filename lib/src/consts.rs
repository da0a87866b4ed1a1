//! Shared constants.

/// Default cap on a single token's length, in bytes. Tokens longer than the
/// configured cap are rejected with a syntax error rather than truncated.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 1024;
