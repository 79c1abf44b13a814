//! Logger instances
//!
//! A `Logger` is a cheap, cloneable handle. Clones share one instance: a
//! threshold changed through one clone is visible through every other.

use crate::context::{Context, RecordContext};
use crate::level::Level;
use crate::notify::{Notifier, Toast};
use crate::record::{Event, LogRecord, TimerPhase};
use crate::router::Router;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

struct Inner {
    context: Mutex<Context>,
    /// Scratch state for `toast`; not part of the logging contract
    last: Mutex<Option<(Level, Event)>>,
    router: Arc<Router>,
}

/// Handle to a logger instance
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl Logger {
    pub(crate) fn new(context: Context, router: Arc<Router>) -> Self {
        Self {
            inner: Arc::new(Inner {
                context: Mutex::new(context),
                last: Mutex::new(None),
                router,
            }),
        }
    }

    /// True if both handles refer to the same instance
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // === Configuration ===

    pub fn name(&self) -> Option<String> {
        self.inner.context.lock().name.clone()
    }

    /// Snapshot of the instance context
    pub fn context(&self) -> Context {
        self.inner.context.lock().clone()
    }

    pub fn level(&self) -> Level {
        self.inner.context.lock().filter_level
    }

    pub fn server_level(&self) -> Level {
        self.inner.context.lock().server_filter_level
    }

    /// Replace the local threshold
    pub fn set_level(&self, level: Level) {
        self.inner.context.lock().filter_level = level;
    }

    /// Replace the server threshold
    pub fn set_server_level(&self, level: Level) {
        self.inner.context.lock().server_filter_level = level;
    }

    /// Set the local threshold from a level name; unknown names are ignored
    pub fn set_level_named(&self, name: &str) {
        if let Some(level) = parse_level(name) {
            self.set_level(level);
        }
    }

    /// Set the server threshold from a level name; unknown names are ignored
    pub fn set_server_level_named(&self, name: &str) {
        if let Some(level) = parse_level(name) {
            self.set_server_level(level);
        }
    }

    /// Set the local threshold from a rank; unknown ranks are ignored
    pub fn set_level_rank(&self, rank: u32) {
        if let Some(level) = Level::from_rank(rank) {
            self.set_level(level);
        }
    }

    /// Set the server threshold from a rank; unknown ranks are ignored
    pub fn set_server_level_rank(&self, rank: u32) {
        if let Some(level) = Level::from_rank(rank) {
            self.set_server_level(level);
        }
    }

    pub fn enabled_for(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    pub fn server_enabled_for(&self, level: Level) -> bool {
        level.passes(self.server_level())
    }

    // === Emission ===

    pub fn debug(&self, record: impl Into<LogRecord>) -> &Self {
        self.invoke(Level::Debug, Event::Message(record.into()))
    }

    pub fn info(&self, record: impl Into<LogRecord>) -> &Self {
        self.invoke(Level::Info, Event::Message(record.into()))
    }

    /// Alias for [`Logger::info`]
    pub fn log(&self, record: impl Into<LogRecord>) -> &Self {
        self.info(record)
    }

    pub fn success(&self, record: impl Into<LogRecord>) -> &Self {
        self.invoke(Level::Success, Event::Message(record.into()))
    }

    pub fn warning(&self, record: impl Into<LogRecord>) -> &Self {
        self.invoke(Level::Warning, Event::Message(record.into()))
    }

    pub fn error(&self, record: impl Into<LogRecord>) -> &Self {
        self.invoke(Level::Error, Event::Message(record.into()))
    }

    /// Start a named timer. Empty labels are dropped.
    pub fn time(&self, label: &str) -> &Self {
        self.timer(label, TimerPhase::Start)
    }

    /// Stop a named timer. Empty labels are dropped.
    pub fn time_end(&self, label: &str) -> &Self {
        self.timer(label, TimerPhase::End)
    }

    fn timer(&self, label: &str, phase: TimerPhase) -> &Self {
        if label.is_empty() {
            debug!(phase = phase.as_str(), "Dropping timer event with empty label");
            return self;
        }
        self.invoke(
            Level::Time,
            Event::Timer {
                label: label.to_string(),
                phase,
            },
        )
    }

    /// Record `event` as the last invocation, then route it through each
    /// path whose threshold it passes. The two checks are independent.
    pub fn invoke(&self, level: Level, event: Event) -> &Self {
        *self.inner.last.lock() = Some((level, event.clone()));

        // Snapshot so no lock is held while handlers run
        let context = self.inner.context.lock().clone();
        let local_enabled = level.passes(context.filter_level);
        let server_enabled = level.passes(context.server_filter_level);
        if !local_enabled && !server_enabled {
            return self;
        }

        let record_context: RecordContext = context.with_level(level);
        self.inner
            .router
            .dispatch(&event, &record_context, local_enabled, server_enabled);
        self
    }

    /// Level and payload of the most recent emission attempt, filtered or not
    pub fn last_invocation(&self) -> Option<(Level, Event)> {
        self.inner.last.lock().clone()
    }

    /// Show the most recent emission as a toast. Does nothing if this
    /// logger has not emitted anything yet.
    pub fn toast<N: Notifier>(&self, notifier: &N, options: &N::Options) {
        let last = self.inner.last.lock().clone();
        if let Some((level, event)) = last {
            notifier.notify(&Toast::from_event(level, &event), options);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("context", &*self.inner.context.lock())
            .finish()
    }
}

fn parse_level(name: &str) -> Option<Level> {
    match name.parse::<Level>() {
        Ok(level) => Some(level),
        Err(e) => {
            debug!(error = %e, "Ignoring malformed level");
            None
        }
    }
}
