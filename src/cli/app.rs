//! Main CLI application

use crate::error::Result;
use crate::greeter::greet;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

/// The usage line printed instead of a greeting
pub const USAGE: &str = "Usage: hello [greeting] [noun]";

/// Largest argument vector (invocation name included) that still greets
const MAX_ARGS: usize = 3;

/// What a given argument vector asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Print the usage line
    Usage,
    /// Print the greeting; `None` means use the default word
    Greet {
        greeting: Option<&'a OsStr>,
        noun: Option<&'a OsStr>,
    },
}

/// CLI application
pub struct App {
    /// The raw argument vector, invocation name first
    args: Vec<OsString>,
}

impl App {
    /// Create an app over an argument vector
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        App {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an app over the process arguments, which need not be UTF-8
    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    /// Decide between the usage line and a greeting
    pub fn decide(&self) -> Outcome<'_> {
        let argc = self.args.len();

        // The help flags are matched against args[0], the invocation slot,
        // so `hello -h` greets with "-h".
        if (argc > 1 && is_help_flag(&self.args[0])) || argc > MAX_ARGS {
            return Outcome::Usage;
        }

        Outcome::Greet {
            greeting: self.arg(1),
            noun: self.arg(2),
        }
    }

    /// Write the single output line and return the exit status
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<i32> {
        match self.decide() {
            Outcome::Usage => writeln!(out, "{}", USAGE)?,
            Outcome::Greet { greeting, noun } => {
                out.write_all(&greet(greeting, noun))?;
                out.write_all(b"\n")?;
            }
        }
        out.flush()?;

        Ok(0)
    }

    /// Positional argument, if present
    fn arg(&self, index: usize) -> Option<&OsStr> {
        self.args.get(index).map(OsString::as_os_str)
    }
}

fn is_help_flag(arg: &OsStr) -> bool {
    arg == "-h" || arg == "--help"
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    App::from_env().run_with(&mut out)
}
