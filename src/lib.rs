//! Hello - a tiny greeting printer
//!
//! Prints `<greeting>, <noun>.` from up to two positional arguments, or a
//! usage line when given too many.

// Public modules
pub mod cli;
pub mod error;
pub mod greeter;

// Re-export commonly used types
pub use error::{HelloError, Result};
pub use greeter::greet;
