//! sf-cli library
//!
//! The `sf` binary is a thin wrapper; everything it runs lives here so the
//! command dispatch can be exercised against in-memory stores.

pub mod cli;
pub mod commands;
pub mod confirm;
pub mod console;
pub mod error;
pub mod logger;
pub mod user_commands;

pub use cli::Cli;
pub use confirm::Confirmer;
pub use console::Console;
pub use error::{CliError, Result};

#[cfg(test)]
mod tests;
