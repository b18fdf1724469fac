use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "dwelling_planner=debug,info"
    } else {
        "dwelling_planner=info"
    }
}

/// `RUST_LOG` wins over the verbosity flag when set.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Compact human-readable lines on stderr; targets only shown when verbose.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}

/// JSON lines, for hosts that ship logs to a collector.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "dwelling_planner=info");
        assert!(default_directive(true).starts_with("dwelling_planner=debug"));
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
