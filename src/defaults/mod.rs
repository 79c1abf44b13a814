//! Default bindings
//!
//! Wires a `Splogger` to a console sink for the local path and an HTTP
//! transport for the server path:
//! - `console` - `Console` trait, `TracingConsole`, `init_tracing`
//! - `console_handler` - local handler with level channels and timers
//! - `server` - server handler and the JSON body it sends
//! - `transport` - fire-and-forget HTTP delivery

pub mod console;
pub mod console_handler;
pub mod server;
pub mod transport;

pub use console::{init_tracing, Channel, Console, TracingConsole};
pub use console_handler::ConsoleHandler;
pub use server::{HttpServerHandler, ServerBody};
pub use transport::{ErrorCallback, HttpTransport, Transport};

use crate::constants::{DEFAULT_LEVEL, DEFAULT_SERVER_LEVEL, DEFAULT_TRANSPORT_TIMEOUT_SECS};
use crate::context::RecordContext;
use crate::level::Level;
use crate::record::LogRecord;
use crate::splogger::Splogger;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Turns a record into the ordered parts of a console line
pub type Formatter = Arc<dyn Fn(&LogRecord, &RecordContext) -> Vec<String> + Send + Sync>;

/// `[name]`, title, message, then data as JSON; absent parts are skipped
pub fn default_formatter() -> Formatter {
    Arc::new(|record: &LogRecord, context: &RecordContext| {
        let mut parts = Vec::with_capacity(4);
        if let Some(name) = &context.name {
            parts.push(format!("[{}]", name));
        }
        if let Some(title) = &record.title {
            parts.push(title.clone());
        }
        parts.push(record.message.clone());
        if let Some(data) = record.data.as_ref().filter(|d| !d.is_null()) {
            parts.push(data.to_string());
        }
        parts
    })
}

/// Options for [`Splogger::use_defaults`]
pub struct DefaultOptions {
    /// Console line formatter (default: [`default_formatter`])
    pub formatter: Option<Formatter>,
    pub server_url: Option<String>,
    /// Global local threshold (default: DEBUG)
    pub default_level: Option<Level>,
    /// Global server threshold (default: WARNING)
    pub default_server_level: Option<Level>,
    /// Console sink; `None` means no console is available and nothing is installed
    pub console: Option<Arc<dyn Console>>,
    /// Server transport (default: [`HttpTransport`])
    pub transport: Option<Arc<dyn Transport>>,
    /// Sent as `location` in every server body
    pub location: Option<String>,
    /// Timeout of the default HTTP transport
    pub transport_timeout: Duration,
    /// Receives failures of the default HTTP transport
    pub on_transport_error: Option<ErrorCallback>,
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self {
            formatter: None,
            server_url: None,
            default_level: None,
            default_server_level: None,
            console: Some(Arc::new(TracingConsole)),
            transport: None,
            location: None,
            transport_timeout: Duration::from_secs(DEFAULT_TRANSPORT_TIMEOUT_SECS),
            on_transport_error: None,
        }
    }
}

/// Install the default bindings on `splogger`
pub(crate) fn install(splogger: &Splogger, options: DefaultOptions) {
    let Some(console) = options.console else {
        debug!("No console available, default bindings not installed");
        return;
    };

    splogger.set_level(options.default_level.unwrap_or(DEFAULT_LEVEL));
    splogger.set_server_level(options.default_server_level.unwrap_or(DEFAULT_SERVER_LEVEL));
    splogger.set_server_url(options.server_url);

    let formatter = options.formatter.unwrap_or_else(default_formatter);
    splogger.set_handler(ConsoleHandler::new(console, formatter));

    let transport = match options.transport {
        Some(transport) => transport,
        None => match HttpTransport::new(options.transport_timeout, options.on_transport_error) {
            Ok(transport) => Arc::new(transport),
            Err(e) => {
                warn!(error = %e, "Server logging disabled");
                return;
            }
        },
    };
    splogger.set_server_handler(HttpServerHandler::new(transport, options.location));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use parking_lot::Mutex;
    use serde_json::json;

    #[derive(Default)]
    struct FakeConsole(Mutex<Vec<(Channel, String)>>);

    impl Console for FakeConsole {
        fn write(&self, channel: Channel, line: &str) {
            self.0.lock().push((channel, line.to_string()));
        }
    }

    #[derive(Default)]
    struct FakeTransport(Mutex<Vec<(String, ServerBody)>>);

    impl Transport for FakeTransport {
        fn send(&self, url: &str, body: ServerBody) {
            self.0.lock().push((url.to_string(), body));
        }
    }

    fn options(console: &Arc<FakeConsole>, transport: &Arc<FakeTransport>) -> DefaultOptions {
        DefaultOptions {
            console: Some(console.clone()),
            transport: Some(transport.clone()),
            server_url: Some("http://logs/ingest".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_formatter_order() {
        let ctx = Context::named_from("db", &Context::unnamed(Level::Debug)).with_level(Level::Info);
        let record = LogRecord::new("connected")
            .with_data(json!({"pool": 4}))
            .with_title("Postgres");

        let parts = default_formatter()(&record, &ctx);
        assert_eq!(parts, vec!["[db]", "Postgres", "connected", "{\"pool\":4}"]);
    }

    #[test]
    fn test_default_formatter_minimal() {
        let ctx = Context::unnamed(Level::Debug).with_level(Level::Info);
        let parts = default_formatter()(&LogRecord::new("hi"), &ctx);
        assert_eq!(parts, vec!["hi"]);
    }

    #[test]
    fn test_install_sets_default_levels() {
        let log = Splogger::new();
        let early = log.get("early");
        let console = Arc::new(FakeConsole::default());
        let transport = Arc::new(FakeTransport::default());

        log.use_defaults(options(&console, &transport));

        assert_eq!(log.level(), Level::Debug);
        assert_eq!(log.server_level(), Level::Warning);
        assert_eq!(early.server_level(), Level::Warning);
        assert_eq!(log.server_url().as_deref(), Some("http://logs/ingest"));
    }

    #[test]
    fn test_install_routes_both_paths() {
        let log = Splogger::new();
        let console = Arc::new(FakeConsole::default());
        let transport = Arc::new(FakeTransport::default());
        log.use_defaults(DefaultOptions {
            location: Some("/settings".into()),
            ..options(&console, &transport)
        });

        log.get("ui").info("opened").warning("slow");

        let lines = console.0.lock();
        assert_eq!(
            *lines,
            vec![
                (Channel::Info, "[ui] opened".to_string()),
                (Channel::Warn, "[ui] slow".to_string())
            ]
        );
        let sent = transport.0.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1.message, "slow");
        assert_eq!(sent[0].1.location.as_deref(), Some("/settings"));
    }

    #[test]
    fn test_custom_formatter_and_levels() {
        let log = Splogger::new();
        let console = Arc::new(FakeConsole::default());
        let transport = Arc::new(FakeTransport::default());
        let formatter: Formatter = Arc::new(|record: &LogRecord, ctx: &RecordContext| {
            vec![ctx.level.to_string(), record.message.to_uppercase()]
        });
        log.use_defaults(DefaultOptions {
            formatter: Some(formatter),
            default_level: Some(Level::Success),
            default_server_level: Some(Level::Off),
            ..options(&console, &transport)
        });

        log.info("skipped").success("done").error("bad");

        let lines = console.0.lock();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1, "SUCCESS DONE");
        assert!(transport.0.lock().is_empty());
    }

    #[test]
    fn test_no_console_installs_nothing() {
        let log = Splogger::new();
        log.use_defaults(DefaultOptions {
            console: None,
            ..Default::default()
        });

        assert_eq!(log.level(), Level::Off);
        assert_eq!(log.server_url(), None);
    }
}
