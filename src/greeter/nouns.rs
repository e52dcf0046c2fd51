//! Noun lookup

use std::ffi::OsStr;

/// Noun used when none is given
pub const DEFAULT_NOUN: &str = "world";

/// Resolve the noun
pub fn lookup(noun: Option<&OsStr>) -> &OsStr {
    noun.unwrap_or(OsStr::new(DEFAULT_NOUN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_none() {
        assert_eq!(lookup(None), "world");
    }

    #[test]
    fn test_lookup_given() {
        assert_eq!(lookup(Some(OsStr::new("you"))), "you");
    }
}
