use colored::Colorize;
use hello::error::is_broken_pipe;
use std::process;

fn main() {
    match hello::cli::run() {
        Ok(status) => process::exit(status),
        // Reader went away before the line was written
        Err(e) if is_broken_pipe(&e) => process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
