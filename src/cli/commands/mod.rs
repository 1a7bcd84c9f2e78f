//! Command implementations.
//!
//! Each subcommand lives in its own module and implements the
//! [`Command`](dispatcher::Command) trait.

pub mod completions;
pub mod debug;
pub mod dispatcher;
pub mod lint;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
