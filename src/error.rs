//! Error types for Hello

use std::io;
use thiserror::Error;

/// Result type alias for Hello operations
pub type Result<T> = std::result::Result<T, HelloError>;

/// Main error type for Hello
///
/// Every argument vector is valid input, so the only thing that can go wrong
/// is writing the line out.
#[derive(Error, Debug)]
pub enum HelloError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Helper to tell a closed stdout (e.g. `hello | head -0`) apart from other
/// write failures
pub fn is_broken_pipe(err: &HelloError) -> bool {
    matches!(err, HelloError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
}
