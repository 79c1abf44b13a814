//! Logging context: registry, global logger and handler wiring
//!
//! A `Splogger` is built once by the application and handed to whatever
//! needs to log. Named loggers obtained through [`Splogger::get`] are shared:
//! every caller asking for the same name gets the same instance.

use crate::constants::GLOBAL_INITIAL_LEVEL;
use crate::context::Context;
use crate::defaults::{self, DefaultOptions};
use crate::handler::{LocalHandler, ServerHandler};
use crate::level::Level;
use crate::logger::Logger;
use crate::record::{Event, LogRecord};
use crate::router::Router;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Registry of named loggers plus the unnamed global logger
pub struct Splogger {
    router: Arc<Router>,
    global: Logger,
    registry: Mutex<HashMap<String, Logger>>,
}

impl Default for Splogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Splogger {
    /// New context with no handlers and the global logger silenced
    pub fn new() -> Self {
        let router = Arc::new(Router::new());
        let global = Logger::new(Context::unnamed(GLOBAL_INITIAL_LEVEL), router.clone());
        Self {
            router,
            global,
            registry: Mutex::new(HashMap::new()),
        }
    }

    // === Registry ===

    /// Get the logger registered under `name`, creating it on first use.
    ///
    /// A new logger copies the global thresholds as they are now; it does
    /// not follow later global changes except through the fan-out setters.
    pub fn get(&self, name: &str) -> Logger {
        let mut registry = self.registry.lock();
        registry
            .entry(name.to_string())
            .or_insert_with(|| {
                let context = Context::named_from(name, &self.global.context());
                Logger::new(context, self.router.clone())
            })
            .clone()
    }

    /// Names of every registered logger, sorted
    pub fn loggers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// The unnamed global logger
    pub fn global_logger(&self) -> &Logger {
        &self.global
    }

    // === Global thresholds with fan-out ===

    /// Set the local threshold of the global logger and of every logger
    /// registered at the time of the call
    pub fn set_level(&self, level: Level) {
        self.global.set_level(level);
        for logger in self.registry.lock().values() {
            logger.set_level(level);
        }
    }

    /// Set the server threshold of the global logger and of every logger
    /// registered at the time of the call
    pub fn set_server_level(&self, level: Level) {
        self.global.set_server_level(level);
        for logger in self.registry.lock().values() {
            logger.set_server_level(level);
        }
    }

    /// [`Splogger::set_level`] from a level name; unknown names change nothing
    pub fn set_level_named(&self, name: &str) {
        match name.parse::<Level>() {
            Ok(level) => self.set_level(level),
            Err(e) => debug!(error = %e, "Ignoring malformed global level"),
        }
    }

    /// [`Splogger::set_server_level`] from a level name; unknown names change nothing
    pub fn set_server_level_named(&self, name: &str) {
        match name.parse::<Level>() {
            Ok(level) => self.set_server_level(level),
            Err(e) => debug!(error = %e, "Ignoring malformed global server level"),
        }
    }

    pub fn level(&self) -> Level {
        self.global.level()
    }

    pub fn server_level(&self) -> Level {
        self.global.server_level()
    }

    pub fn enabled_for(&self, level: Level) -> bool {
        self.global.enabled_for(level)
    }

    pub fn server_enabled_for(&self, level: Level) -> bool {
        self.global.server_enabled_for(level)
    }

    // === Handlers ===

    /// Replace the local handler
    pub fn set_handler(&self, handler: impl LocalHandler + 'static) {
        self.router.set_handler(Arc::new(handler));
    }

    /// Replace the server handler
    pub fn set_server_handler(&self, handler: impl ServerHandler + 'static) {
        self.router.set_server_handler(Arc::new(handler));
    }

    /// Replace the URL passed to the server handler
    pub fn set_server_url(&self, url: Option<String>) {
        self.router.set_server_url(url);
    }

    pub fn server_url(&self) -> Option<String> {
        self.router.server_url()
    }

    /// Remove both handlers
    pub fn clear_handlers(&self) {
        self.router.clear();
    }

    /// Install the console and server bindings. See [`DefaultOptions`].
    pub fn use_defaults(&self, options: DefaultOptions) {
        defaults::install(self, options);
    }

    // === Emission through the global logger ===

    pub fn debug(&self, record: impl Into<LogRecord>) -> &Logger {
        self.global.debug(record)
    }

    pub fn info(&self, record: impl Into<LogRecord>) -> &Logger {
        self.global.info(record)
    }

    pub fn log(&self, record: impl Into<LogRecord>) -> &Logger {
        self.global.log(record)
    }

    pub fn success(&self, record: impl Into<LogRecord>) -> &Logger {
        self.global.success(record)
    }

    pub fn warning(&self, record: impl Into<LogRecord>) -> &Logger {
        self.global.warning(record)
    }

    pub fn error(&self, record: impl Into<LogRecord>) -> &Logger {
        self.global.error(record)
    }

    pub fn time(&self, label: &str) -> &Logger {
        self.global.time(label)
    }

    pub fn time_end(&self, label: &str) -> &Logger {
        self.global.time_end(label)
    }

    pub fn invoke(&self, level: Level, event: Event) -> &Logger {
        self.global.invoke(level, event)
    }
}

impl std::fmt::Debug for Splogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Splogger")
            .field("router", &self.router)
            .field("global", &self.global)
            .field("loggers", &self.loggers())
            .finish()
    }
}

/// Process-wide context for code that cannot have one passed in
pub fn global() -> &'static Splogger {
    static GLOBAL: OnceLock<Splogger> = OnceLock::new();
    GLOBAL.get_or_init(Splogger::new)
}
