//! Per-logger configuration and the merged context handed to handlers

use crate::level::Level;

/// Configuration owned by exactly one logger instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: Option<String>,
    pub filter_level: Level,
    pub server_filter_level: Level,
}

impl Context {
    /// Context of an unnamed logger with both thresholds at `level`
    pub fn unnamed(level: Level) -> Self {
        Self {
            name: None,
            filter_level: level,
            server_filter_level: level,
        }
    }

    /// Context for a new named logger, copying the thresholds of `template`
    /// as they are right now
    pub fn named_from(name: impl Into<String>, template: &Context) -> Self {
        Self {
            name: Some(name.into()),
            filter_level: template.filter_level,
            server_filter_level: template.server_filter_level,
        }
    }

    /// Merge an emission level into this context
    pub fn with_level(&self, level: Level) -> RecordContext {
        RecordContext {
            level,
            name: self.name.clone(),
            filter_level: self.filter_level,
            server_filter_level: self.server_filter_level,
        }
    }
}

/// Context passed to handlers for a single emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordContext {
    /// Level the event was emitted at
    pub level: Level,
    pub name: Option<String>,
    pub filter_level: Level,
    pub server_filter_level: Level,
}

impl RecordContext {
    /// `"[name] "` prefix, or empty for the global logger
    pub fn name_prefix(&self) -> String {
        match &self.name {
            Some(name) => format!("[{}] ", name),
            None => String::new(),
        }
    }
}
