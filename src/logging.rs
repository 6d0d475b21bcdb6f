use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize console logging for docgrid.
///
/// Logs go to stderr so the rendered grid on stdout stays clean. The
/// `RUST_LOG` environment variable overrides `level` when set.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("docgrid={}", level)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    Registry::default().with(env_filter).with(console_layer).init();

    debug!("logging initialized at level: {}", level);
}
