//! Library-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

use crate::level::Level;

// =============================================================================
// Levels
// =============================================================================

/// Initial threshold of the global logger (both paths silenced)
pub const GLOBAL_INITIAL_LEVEL: Level = Level::Off;

/// Local threshold installed by `use_defaults` when none is given
pub const DEFAULT_LEVEL: Level = Level::Debug;

/// Server threshold installed by `use_defaults` when none is given
pub const DEFAULT_SERVER_LEVEL: Level = Level::Warning;

// =============================================================================
// Server transport
// =============================================================================

/// HTTP timeout for a single log POST (seconds)
pub const DEFAULT_TRANSPORT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent with log POSTs
pub const TRANSPORT_USER_AGENT: &str = concat!("splogger/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Formatting
// =============================================================================

/// Separator inserted between a toast message and its JSON data
pub const TOAST_DATA_SEPARATOR: &str = "<br>";
