//! Command parsing and name resolution.

mod command;
mod resolver;

pub use command::{Command, Verb, combat_verbs, help_line, parse_command};
pub use resolver::{closest, did_you_mean};
