//! Run options.

use crate::consts::DEFAULT_MAX_TOKEN_LEN;

/// Tunables for a closure run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum length of a single token, in bytes. Exceeding it is a fatal
    /// syntax error, never silent truncation.
    pub max_token_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}
