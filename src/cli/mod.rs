//! Command-line front end: argument parsing, report rendering and styled output.

pub mod command;
pub mod output;
pub mod report;

pub use command::{parse_args, Command, Invocation, USAGE};
