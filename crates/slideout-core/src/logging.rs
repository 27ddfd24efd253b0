use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "debug,slideout=trace";

/// Install a `fmt` subscriber for the current process.
///
/// Honors `RUST_LOG` when present. Calling this more than once is harmless;
/// later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
