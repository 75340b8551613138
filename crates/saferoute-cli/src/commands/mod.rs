// Handlers for CLI subcommands.
//
// main.rs parses arguments and dispatches; each handler loads what it needs
// and prints to stdout.

pub mod network;
pub mod route;
