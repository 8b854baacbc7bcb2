//! CLI subcommand implementations.

pub mod claims;
pub mod entities;
pub mod lookup;
pub mod search;
