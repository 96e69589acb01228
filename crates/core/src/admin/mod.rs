//! Platform administration

mod console;
pub mod ports;

pub use console::AdminConsole;
