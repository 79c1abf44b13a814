//! Toast convenience
//!
//! Turns the last thing a logger emitted into a user-facing notification.
//! Rendering belongs to whatever implements [`Notifier`].

use crate::constants::TOAST_DATA_SEPARATOR;
use crate::level::Level;
use crate::record::Event;

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Time,
    Warning,
    Error,
    Off,
}

impl ToastKind {
    /// Debug has no toast style of its own and renders as info
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Debug | Level::Info => ToastKind::Info,
            Level::Success => ToastKind::Success,
            Level::Time => ToastKind::Time,
            Level::Warning => ToastKind::Warning,
            Level::Error => ToastKind::Error,
            Level::Off => ToastKind::Off,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Time => "time",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
            ToastKind::Off => "off",
        }
    }
}

/// A toast ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub title: Option<String>,
}

impl Toast {
    /// Build a toast from an emitted event
    pub fn from_event(level: Level, event: &Event) -> Self {
        let mut message = event.message().to_string();
        if let Some(data) = event.data().filter(|d| !d.is_null()) {
            message.push_str(TOAST_DATA_SEPARATOR);
            message.push_str(&data.to_string());
        }

        Self {
            kind: ToastKind::for_level(level),
            message,
            title: event.title().map(String::from),
        }
    }
}

/// Toast renderer
pub trait Notifier {
    /// Renderer-specific display options (duration, position, ...)
    type Options;

    fn notify(&self, toast: &Toast, options: &Self::Options);
}
