use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset
pub fn default_filter(level: &str) -> String {
    format!("weft={level},weft_cli={level}")
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `level`.
/// Output goes to stderr so command output on stdout stays parseable.
pub fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level).into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("debug"), "weft=debug,weft_cli=debug");
    }
}
