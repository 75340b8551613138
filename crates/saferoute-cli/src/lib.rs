//! SafeRoute CLI library.
//!
//! Subcommand handlers, output formatting and logging setup for the
//! `saferoute-cli` binary.

pub mod commands;
pub mod logging;
pub mod output;
