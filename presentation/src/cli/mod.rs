//! CLI definitions

mod commands;

pub use commands::{Cli, Command};
