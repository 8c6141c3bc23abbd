//! Logging initialization for comments_app.
//!
//! Logs go to stderr so stdout carries only the rendered screen.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize the terminal logger at `level`.
///
/// Only records from the pipeline (target `comments`) pass; transport
/// internals (reqwest, hyper, rustls) are filtered out.
pub fn initialize(level: LevelFilter) {
    let config = build_config();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn build_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str(comments_logging::LOG_TARGET);
    builder.build()
}
