//! Limits enforced on the keyword list of incoming user records.
//!
//! Text and certificate-count limits live on the model attributes.

/// Maximum number of keywords on one user.
pub const MAX_KEYWORDS: usize = 50;

/// Maximum length of a single keyword, in characters.
pub const MAX_KEYWORD_LENGTH: usize = 50;
