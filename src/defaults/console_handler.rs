//! Local handler writing to a [`Console`]

use super::console::{Channel, Console};
use super::Formatter;
use crate::context::RecordContext;
use crate::handler::LocalHandler;
use crate::level::Level;
use crate::record::{Event, TimerPhase};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct ConsoleHandler {
    console: Arc<dyn Console>,
    formatter: Formatter,
    /// Start instants for consoles without native timers
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleHandler {
    pub fn new(console: Arc<dyn Console>, formatter: Formatter) -> Self {
        Self {
            console,
            formatter,
            timers: Mutex::new(HashMap::new()),
        }
    }

    fn channel_for(level: Level) -> Channel {
        match level {
            Level::Warning => Channel::Warn,
            Level::Error => Channel::Error,
            Level::Info | Level::Success => Channel::Info,
            _ => Channel::Log,
        }
    }

    fn handle_timer(&self, label: &str, phase: TimerPhase, context: &RecordContext) {
        let label = format!("{}{}", context.name_prefix(), label);
        let native = self.console.supports_timers();

        match phase {
            TimerPhase::Start if native => self.console.time(&label),
            TimerPhase::Start => {
                self.timers.lock().insert(label, Instant::now());
            }
            TimerPhase::End if native => self.console.time_end(&label),
            TimerPhase::End => {
                let started = self.timers.lock().remove(&label);
                let elapsed_ms = match started {
                    Some(start) => start.elapsed().as_millis(),
                    None => {
                        debug!(label = %label, "Timer ended without a start");
                        0
                    }
                };
                self.console
                    .write(Channel::Log, &format!("{}: {}ms", label, elapsed_ms));
            }
        }
    }
}

impl LocalHandler for ConsoleHandler {
    fn handle(&self, event: &Event, context: &RecordContext) {
        match event {
            Event::Timer { label, phase } => self.handle_timer(label, *phase, context),
            Event::Message(record) => {
                let parts = (self.formatter)(record, context);
                self.console
                    .write(Self::channel_for(context.level), &parts.join(" "));
            }
        }
    }
}
