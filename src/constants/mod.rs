//! Application constants module.
//!
//! Centralizes error codes, error messages, success messages and the
//! field limits applied when validating user records.

pub mod error_codes;
pub mod errors;
pub mod limits;
pub mod messages;

pub use error_codes::*;
pub use errors::*;
pub use limits::*;
pub use messages::*;
