//! Log payloads
//!
//! A message carries at most three positional values: the message itself,
//! optional structured data and an optional title. Timer events carry a
//! label and a phase.

use serde::Serialize;
use serde_json::Value;

/// A single log message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LogRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            title: None,
        }
    }

    /// Attach structured data
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Attach a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl From<&str> for LogRecord {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for LogRecord {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&String> for LogRecord {
    fn from(message: &String) -> Self {
        Self::new(message.as_str())
    }
}

/// Which end of a timer an event marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Start,
    End,
}

impl TimerPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TimerPhase::Start => "start",
            TimerPhase::End => "end",
        }
    }
}

/// What a handler receives
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Message(LogRecord),
    Timer { label: String, phase: TimerPhase },
}

impl Event {
    /// Positional view of the payload: `[message, data, title]` with
    /// trailing absent values dropped, or `[label, phase]` for timers
    pub fn args(&self) -> Vec<Value> {
        match self {
            Event::Message(record) => {
                let mut args = vec![Value::String(record.message.clone())];
                match (&record.data, &record.title) {
                    (data, Some(title)) => {
                        args.push(data.clone().unwrap_or(Value::Null));
                        args.push(Value::String(title.clone()));
                    }
                    (Some(data), None) => args.push(data.clone()),
                    (None, None) => {}
                }
                args
            }
            Event::Timer { label, phase } => vec![
                Value::String(label.clone()),
                Value::String(phase.as_str().to_string()),
            ],
        }
    }

    /// Primary text of the event (message or timer label)
    pub fn message(&self) -> &str {
        match self {
            Event::Message(record) => &record.message,
            Event::Timer { label, .. } => label,
        }
    }

    /// Secondary value: record data, or the timer phase as a string
    pub fn data(&self) -> Option<Value> {
        match self {
            Event::Message(record) => record.data.clone(),
            Event::Timer { phase, .. } => Some(Value::String(phase.as_str().to_string())),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Event::Message(record) => record.title.as_deref(),
            Event::Timer { .. } => None,
        }
    }
}

impl From<LogRecord> for Event {
    fn from(record: LogRecord) -> Self {
        Event::Message(record)
    }
}
