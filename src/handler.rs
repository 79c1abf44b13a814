//! Handler capabilities
//!
//! Handlers are the only place side effects happen. A logger decides
//! whether to call them; they decide what emitting means.
//!
//! Closures with the matching signature implement both traits, so tests
//! and small embeddings can register plain functions:
//!
//! ```
//! use splogger::{Splogger, Level};
//!
//! let log = Splogger::new();
//! log.set_handler(|event: &splogger::Event, ctx: &splogger::RecordContext| {
//!     println!("{} {}", ctx.level, event.message());
//! });
//! log.set_level(Level::Info);
//! log.info("ready");
//! ```

use crate::context::RecordContext;
use crate::record::Event;

/// Receives events that passed the local threshold
pub trait LocalHandler: Send + Sync {
    fn handle(&self, event: &Event, context: &RecordContext);
}

/// Receives events that passed the server threshold
pub trait ServerHandler: Send + Sync {
    fn handle(&self, event: &Event, context: &RecordContext, server_url: Option<&str>);
}

impl<F> LocalHandler for F
where
    F: Fn(&Event, &RecordContext) + Send + Sync,
{
    fn handle(&self, event: &Event, context: &RecordContext) {
        self(event, context)
    }
}

impl<F> ServerHandler for F
where
    F: Fn(&Event, &RecordContext, Option<&str>) + Send + Sync,
{
    fn handle(&self, event: &Event, context: &RecordContext, server_url: Option<&str>) {
        self(event, context, server_url)
    }
}
