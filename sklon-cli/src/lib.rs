//! Sklon CLI library
//!
//! This library provides the command-line interface and the request/reply
//! server for the sklon Russian numeral declension engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod server;

pub use error::{CliError, CliResult};
