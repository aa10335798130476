//! Shared constants, errors and configuration for the weblink crates.

pub mod config;
pub mod constants;
pub mod error;
