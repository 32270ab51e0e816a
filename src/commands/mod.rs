//! Command implementations for the CLI.

pub mod delegate;
pub mod detect;
