//! # aget-cli
//!
//! Binary foundation: argument parsing, env config, component assembly and the two run modes.

pub mod cli;
pub mod components;
pub mod config;

pub use cli::{Cli, Commands};
pub use components::{build_handler_chain, BotComponents};
pub use config::BotConfig;
