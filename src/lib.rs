//! Typedrill - an interactive revision drill for primitive data types
//!
//! This library provides the value showcase, the numeric promotion and
//! division demonstration, and the trivia quiz that make up a drill session.

pub mod cli;
pub mod demo;
pub mod quiz;
pub mod session;
pub mod utils;

// Re-export the session types for easier use
pub use quiz::{Question, question_bank};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
