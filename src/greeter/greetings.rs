//! Greeting word lookup

use std::ffi::OsStr;

/// Greeting used when none is given
pub const DEFAULT_GREETING: &str = "Hello";

/// Resolve the greeting word
pub fn lookup(greeting: Option<&OsStr>) -> &OsStr {
    greeting.unwrap_or(OsStr::new(DEFAULT_GREETING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_none() {
        assert_eq!(lookup(None), "Hello");
    }

    #[test]
    fn test_lookup_given() {
        assert_eq!(lookup(Some(OsStr::new("Seeya"))), "Seeya");
    }
}
