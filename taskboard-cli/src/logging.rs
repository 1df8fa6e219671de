//! Tracing setup: one fmt layer to stderr behind an env filter

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// The filter directive for the given flags, falling back to `configured`
pub fn log_level(verbose: bool, debug: bool, quiet: bool, configured: &str) -> String {
    if quiet {
        "error".to_string()
    } else if debug {
        "debug".to_string()
    } else if verbose {
        "trace".to_string()
    } else {
        configured.to_string()
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn configure_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_precedence() {
        assert_eq!(log_level(true, true, true, "info"), "error");
        assert_eq!(log_level(true, true, false, "info"), "debug");
        assert_eq!(log_level(true, false, false, "info"), "trace");
        assert_eq!(log_level(false, true, false, "info"), "debug");
        assert_eq!(log_level(false, false, false, "warn"), "warn");
    }
}
