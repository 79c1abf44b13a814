//! Console sink
//!
//! The console is the destination of the local path when the default
//! bindings are installed. `TracingConsole` writes through `tracing`, so
//! whatever subscriber the application installed decides the final output.

/// Output channel selected by level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Log,
    Info,
    Warn,
    Error,
}

/// Console-like sink
pub trait Console: Send + Sync {
    fn write(&self, channel: Channel, line: &str);

    /// Whether the console measures timers itself. When false the console
    /// handler measures elapsed time and prints it on `Channel::Log`.
    fn supports_timers(&self) -> bool {
        false
    }

    fn time(&self, _label: &str) {}

    fn time_end(&self, _label: &str) {}
}

/// Console backed by `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn write(&self, channel: Channel, line: &str) {
        match channel {
            Channel::Log | Channel::Info => tracing::info!(target: "splogger", "{}", line),
            Channel::Warn => tracing::warn!(target: "splogger", "{}", line),
            Channel::Error => tracing::error!(target: "splogger", "{}", line),
        }
    }
}

/// Initialize `tracing` output for the library and the console sink
///
/// Call early in main() before any logging occurs.
/// Set `verbose` to true for debug-level output. `RUST_LOG` wins when set.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(filter)
        .try_init();
}
