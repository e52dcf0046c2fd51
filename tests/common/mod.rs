//! Common test utilities

use assert_cmd::prelude::*;
use std::process::Command;

/// The usage line, newline included
pub const USAGE_LINE: &str = "Usage: hello [greeting] [noun]\n";

/// Command for the built `hello` binary
pub fn hello() -> Command {
    Command::cargo_bin("hello").unwrap()
}
