//! # matcha_core
//!
//! Core domain logic for Matcha Journal.

pub mod chat;
pub mod completion;
pub mod prompt;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
