//! Command-line interface definition using clap
//!
//! The `splogger` binary is a small driver around the library: it emits
//! records through the default bindings so a config file and a server
//! endpoint can be checked by hand.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// =============================================================================
// CLI Definition
// =============================================================================

/// Emit log records through splogger's default console and server bindings
#[derive(Parser, Debug)]
#[command(name = "splogger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Server endpoint (overrides config)
    #[arg(long, value_name = "URL")]
    pub server_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit one record
    Emit {
        /// Logger name (global logger when omitted)
        #[arg(short, long)]
        logger: Option<String>,

        /// Level name: debug, info, success, warning, error
        #[arg(long, default_value = "info")]
        level: String,

        /// Optional title
        #[arg(long)]
        title: Option<String>,

        /// Optional data, parsed as JSON when possible
        #[arg(long)]
        data: Option<String>,

        message: String,
    },

    /// Start a timer, wait, then stop it
    Time {
        #[arg(short, long)]
        logger: Option<String>,

        /// Milliseconds between start and end
        #[arg(long, default_value_t = 100)]
        sleep_ms: u64,

        label: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

// =============================================================================
// Tests
// =============================================================================
