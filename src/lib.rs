//! # certrack - Course and Certification Tracker
//!
//! A single-user terminal tracker for educational institutions, the courses
//! they offer and the certifications earned from those courses.
//!
//! ## Features
//!
//! - **Records**: institutions, courses and certifications in one SQLite file,
//!   linked by foreign keys with cascading deletes
//! - **Status**: No Expiry, Expired, Expiring Soon (within 30 days) or Valid,
//!   derived from the expiry date at read time
//! - **Reports**: certifications grouped by institution, and an expiry overview
//! - **Interface**: subcommands for scripting, menus and prompts for everything else
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
