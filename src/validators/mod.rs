//! Input validation for user records.

pub mod common;
pub mod user;

pub use common::*;
pub use user::*;
