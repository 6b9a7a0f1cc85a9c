//! # CLI Layer
//!
//! This module is **one possible consumer** of the record store; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
