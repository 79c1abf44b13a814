//! splogger - drive the logging facade from the command line
//!
//! Usage:
//!   splogger emit --level warning --logger net "link down"
//!   splogger time --sleep-ms 250 boot
//!   splogger --config splogger.toml config

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use serde_json::Value;
use splogger::{
    init_tracing, DefaultOptions, ErrorCallback, Event, HttpTransport, Level, LogRecord, Logger,
    Result, Splogger, SploggerConfig, SploggerError,
};
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::warn;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SploggerConfig::load(path)?,
        None => SploggerConfig::default(),
    };
    if let Some(url) = cli.server_url {
        config.server.url = Some(url);
        config.validate()?;
    }

    if let Command::Config = cli.command {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let timeout = Duration::from_secs(config.server.timeout_secs);
    let on_error: ErrorCallback = Arc::new(|e: &SploggerError| {
        eprintln!("Server logging failed: {}", e);
    });
    let transport = Arc::new(HttpTransport::new(timeout, Some(on_error))?);

    let log = Splogger::new();
    log.use_defaults(DefaultOptions {
        transport: Some(transport.clone()),
        ..config.default_options()
    });
    config.apply_overrides(&log);

    match cli.command {
        Command::Emit {
            logger,
            level,
            title,
            data,
            message,
        } => {
            let level = level.parse::<Level>().map_err(|e| SploggerError::ConfigValidation {
                field: "level",
                reason: format!("{}", e),
            })?;
            let mut record = LogRecord::new(message);
            if let Some(title) = title {
                record = record.with_title(title);
            }
            if let Some(data) = data {
                record = record.with_data(parse_data(data));
            }
            emit(&resolve(&log, logger), level, record);
        }
        Command::Time {
            logger,
            sleep_ms,
            label,
        } => {
            let logger = resolve(&log, logger);
            logger.time(&label);
            thread::sleep(Duration::from_millis(sleep_ms));
            logger.time_end(&label);
        }
        Command::Config => {}
    }

    if !transport.flush(timeout) {
        warn!(pending = transport.pending(), "Exiting with undelivered server records");
    }
    Ok(())
}

fn resolve(log: &Splogger, name: Option<String>) -> Logger {
    match name {
        Some(name) => log.get(&name),
        None => log.global_logger().clone(),
    }
}

fn emit(logger: &Logger, level: Level, record: LogRecord) {
    match level {
        Level::Time => {
            logger.time(&record.message);
        }
        Level::Off => warn!("OFF is a threshold, not an emission level"),
        _ => {
            logger.invoke(level, Event::Message(record));
        }
    }
}

/// JSON when it parses, a plain string otherwise
fn parse_data(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}
