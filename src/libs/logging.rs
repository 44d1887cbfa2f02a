//! `tracing` subscriber setup.
//!
//! Logs go to stderr so they never interleave with tables and prompts on
//! stdout. `RUST_LOG` wins over the configured level.

use tracing_subscriber::EnvFilter;

pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests, embedding); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
