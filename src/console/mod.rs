//! Terminal front end for a ranking session

pub mod command;
pub mod runner;

pub use command::{Command, CommandError, HELP_TEXT};
pub use runner::Console;
