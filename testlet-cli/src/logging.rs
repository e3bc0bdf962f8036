use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pick the filter used when `RUST_LOG` is not set.
/// `--verbose` wins over the config file; the fallback is `warn`.
pub fn default_filter(verbose: bool, configured: Option<&str>) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.unwrap_or("warn").to_string()
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// table/JSON output.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(stderr_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_precedence() {
        assert_eq!(default_filter(true, Some("error")), "debug");
        assert_eq!(default_filter(false, Some("error")), "error");
        assert_eq!(default_filter(false, None), "warn");
    }
}
