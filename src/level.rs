//! Severity levels
//!
//! Levels are totally ordered by rank. The numeric gaps between ranks are
//! part of the public contract (persisted configurations compare ranks).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Success,
    /// Pseudo-level used only by timer events
    Time,
    Warning,
    Error,
    /// Sentinel above every real level; silences a logger entirely
    Off,
}

impl Level {
    /// Every level, lowest rank first
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Success,
        Level::Time,
        Level::Warning,
        Level::Error,
        Level::Off,
    ];

    /// Numeric rank used for filtering
    pub const fn rank(self) -> u32 {
        match self {
            Level::Debug => 1,
            Level::Info => 2,
            Level::Success => 3,
            Level::Time => 4,
            Level::Warning => 5,
            Level::Error => 8,
            Level::Off => 99,
        }
    }

    /// Upper-case display name
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Time => "TIME",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    /// Look up a level by its exact rank
    pub fn from_rank(rank: u32) -> Option<Level> {
        Self::ALL.into_iter().find(|l| l.rank() == rank)
    }

    /// True if a message at `self` passes a filter set at `threshold`
    #[inline]
    pub fn passes(self, threshold: Level) -> bool {
        self.rank() >= threshold.rank()
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level '{}'", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ranks_preserve_gaps() {
        let ranks: Vec<u32> = Level::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 8, 99]);
    }

    #[test]
    fn test_level_ordering_follows_rank() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Success);
        assert!(Level::Success < Level::Time);
        assert!(Level::Time < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_passes_is_inclusive() {
        assert!(Level::Warning.passes(Level::Warning));
        assert!(Level::Error.passes(Level::Warning));
        assert!(!Level::Debug.passes(Level::Warning));
        assert!(!Level::Error.passes(Level::Off));
        assert!(Level::Off.passes(Level::Off));
    }

    #[test]
    fn test_from_rank() {
        assert_eq!(Level::from_rank(8), Some(Level::Error));
        assert_eq!(Level::from_rank(99), Some(Level::Off));
        assert_eq!(Level::from_rank(6), None);
        assert_eq!(Level::from_rank(0), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warning));
        assert_eq!(" ERROR ".parse::<Level>(), Ok(Level::Error));
        assert_eq!("Success".parse::<Level>(), Ok(Level::Success));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        // WARN was never a defined level
        assert!("warn".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Level::Time.to_string(), "TIME");
    }

    #[test]
    fn test_serde_uses_upper_case_name() {
        let json = serde_json::to_string(&Level::Success).unwrap();
        assert_eq!(json, "\"SUCCESS\"");
        let back: Level = serde_json::from_str("\"OFF\"").unwrap();
        assert_eq!(back, Level::Off);
    }
}
