//! Tally CLI Library
//!
//! Exposes the inventory client building blocks for use by tests and
//! external integrations.

// Transport and loading
pub mod api;
pub mod snapshot;

// Filtering and presentation
pub mod export;
pub mod filter;
pub mod output;
pub mod view;

// Plumbing
pub mod config;
pub mod logging;
