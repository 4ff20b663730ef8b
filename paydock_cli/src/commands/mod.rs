//! CLI subcommand implementations.

pub mod charges;
pub mod customers;
