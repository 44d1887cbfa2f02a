//! Supporting modules for certrack.
//!
//! - **Domain**: certification status derivation (`status`)
//! - **Infrastructure**: configuration, data directory, logging
//! - **Terminal**: messages, validated prompts, table views

pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod prompt;
pub mod status;
pub mod view;
