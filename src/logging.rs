//! Tracing setup. Logs go to stderr so stdout carries only answers.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Used when neither `RUST_LOG` nor `-v` says otherwise.
pub const DEFAULT_DIRECTIVE: &str = "askdesk=error";

pub const VERBOSE_DIRECTIVE: &str = "askdesk=debug";

/// Pick the filter directive: `RUST_LOG` wins, then `-v`, then the default.
pub fn directive(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(env) => env.to_string(),
        None if verbose => VERBOSE_DIRECTIVE.to_string(),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(directive(verbose, rust_log.as_deref()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
