//! splogger - leveled logging facade with independent local and server paths
//!
//! Calling code logs through named [`Logger`]s obtained from a [`Splogger`].
//! Every logger filters twice: once for the local handler (usually a
//! console) and once, independently, for the server handler (usually an
//! HTTP endpoint). Handlers are injected; the facade itself does no I/O.
//!
//! ```
//! use splogger::{Level, LogRecord, Splogger};
//!
//! let log = Splogger::new();
//! log.set_level(Level::Info);
//!
//! let net = log.get("network");
//! net.debug("filtered out");
//! net.warning(LogRecord::new("retrying").with_title("Upload"));
//! assert!(net.ptr_eq(&log.get("network")));
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod defaults;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod notify;
pub mod record;
pub mod router;
pub mod splogger;

pub use config::SploggerConfig;
pub use context::{Context, RecordContext};
pub use defaults::{
    init_tracing, Channel, Console, DefaultOptions, ErrorCallback, Formatter, HttpTransport,
    ServerBody, TracingConsole, Transport,
};
pub use error::{Result, SploggerError};
pub use handler::{LocalHandler, ServerHandler};
pub use level::Level;
pub use logger::Logger;
pub use notify::{Notifier, Toast, ToastKind};
pub use record::{Event, LogRecord, TimerPhase};
pub use splogger::{global, Splogger};
