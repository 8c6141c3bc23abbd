#![deny(missing_docs)]
//! Shared logging utilities for the comments workspace.
//!
//! This crate provides the `comments_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger. Library
//! crates only emit through the macros; installing a logger is left to the
//! binary (or to tests).

#[doc(hidden)]
pub use log as __log;

/// Target used for every record emitted through the macros below, so a
/// binary can filter the pipeline's output independently of dependencies.
pub const LOG_TARGET: &str = "comments";

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! comments_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! comments_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! comments_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use trace level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
