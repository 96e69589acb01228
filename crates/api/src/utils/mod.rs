//! Shared helpers for command implementations

pub mod command_helpers;
pub mod logging;

pub use command_helpers::execute_command;
