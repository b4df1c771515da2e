//! Logging setup
//!
//! Diagnostics go to stderr so they never interleave with the prompts and
//! next-step instructions written to stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a verbosity level
///
/// `0` keeps the terminal quiet apart from warnings, `1` shows what the
/// scaffolder is doing, `2` and above traces every file operation.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,seedling=debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over `verbosity` when set.
///
/// # Example
///
/// ```rust,no_run
/// seedling::observability::init(1);
/// tracing::info!("scaffolder started");
/// ```
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity > 1),
        )
        .try_init();
}
