//! Subcommand handlers

pub mod export;
pub mod inventory;
pub mod nodes;
