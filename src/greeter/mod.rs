//! Greeting construction
//!
//! This module resolves the greeting word and the noun against their
//! defaults and renders the sentence template. Words are carried as
//! `OsStr` and rendered byte for byte, so arguments that are not UTF-8
//! come out exactly as they went in.

pub mod greetings;
pub mod nouns;

pub use greetings::DEFAULT_GREETING;
pub use nouns::DEFAULT_NOUN;

use std::ffi::OsStr;

/// Render `"<greeting>, <noun>."`, falling back to the defaults for any
/// word that is not given
///
/// The trailing newline is left to the caller.
pub fn greet(greeting: Option<&OsStr>, noun: Option<&OsStr>) -> Vec<u8> {
    let greeting = greetings::lookup(greeting).as_encoded_bytes();
    let noun = nouns::lookup(noun).as_encoded_bytes();

    let mut line = Vec::with_capacity(greeting.len() + noun.len() + 3);
    line.extend_from_slice(greeting);
    line.extend_from_slice(b", ");
    line.extend_from_slice(noun);
    line.push(b'.');
    line
}
