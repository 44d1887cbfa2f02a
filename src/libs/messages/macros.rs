//! Output macros for user-facing messages.
//!
//! In normal mode the macros print straight to the terminal. When
//! `CERTRACK_DEBUG` or `RUST_LOG` is set they go through `tracing` instead,
//! so messages interleave with the structured log.
//!
//! - `msg_print!`: plain text
//! - `msg_success!` / `msg_info!` / `msg_warning!` / `msg_error!`: prefixed
//! - `msg_debug!`: only emitted in debug mode
//!
//! ```rust
//! use certrack::{msg_info, msg_success};
//! use certrack::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::NoInstitutionsFound, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("CERTRACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub enum Level {
    Plain,
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Plain => "",
            Level::Success => "✅ ",
            Level::Info => "ℹ️ ",
            Level::Warning => "⚠️ ",
            Level::Error => "❌ ",
        }
    }
}

/// Shared sink behind the `msg_*` macros. `spaced` surrounds the line with blank lines.
#[doc(hidden)]
pub fn emit(level: Level, message: impl std::fmt::Display, spaced: bool) {
    let line = format!("{}{}", level.prefix(), message);
    let line = if spaced { format!("\n{}\n", line) } else { line };

    if is_debug_mode() {
        match level {
            Level::Error => tracing::error!("{}", line),
            Level::Warning => tracing::warn!("{}", line),
            _ => tracing::info!("{}", line),
        }
    } else if matches!(level, Level::Error) {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Plain, $msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Plain, $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Success, $msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Success, $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Info, $msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Info, $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Warning, $msg, false)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Level::Error, $msg, false)
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
