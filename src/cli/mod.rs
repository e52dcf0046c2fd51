//! CLI interface
//!
//! This module maps an argument vector onto either the usage line or a
//! greeting and writes it to stdout.

pub mod app;

// Re-export main types
pub use app::*;
