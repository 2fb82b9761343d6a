//! Log filter setup for the binary

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter from `RUST_LOG`-style directives
///
/// Without directives only warnings and errors are shown. Any directive,
/// including a bare global level such as `debug`, replaces that default.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}
