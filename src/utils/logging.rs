// Logging setup: tracing events go to stderr so stdout only carries results

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "LIBVER_LOG";

/// Filter used when neither `LIBVER_LOG` nor `--verbose` is given
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "warn,libver=debug";

/// Pick the filter directive: explicit env var first, then verbosity
pub fn filter_directive(env_value: Option<&str>, verbose: bool) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ if verbose => VERBOSE_FILTER.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(env_value.as_deref(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
