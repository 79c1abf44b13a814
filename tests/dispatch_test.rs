//! Integration tests for level filtering and routing
//!
//! Exercises the public surface with recording handlers in place of a
//! console and a server.

use parking_lot::Mutex;
use proptest::prelude::*;
use splogger::{Event, Level, LogRecord, RecordContext, Splogger, TimerPhase};
use std::sync::Arc;

// =============================================================================
// Recording handlers
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Emission {
    level: Level,
    name: Option<String>,
    args: Vec<serde_json::Value>,
}

#[derive(Default, Clone)]
struct Recorder {
    local: Arc<Mutex<Vec<Emission>>>,
    server: Arc<Mutex<Vec<(Emission, Option<String>)>>>,
}

impl Recorder {
    fn install(log: &Splogger) -> Self {
        let recorder = Self::default();

        let local = recorder.local.clone();
        log.set_handler(move |event: &Event, ctx: &RecordContext| {
            local.lock().push(emission(event, ctx));
        });

        let server = recorder.server.clone();
        log.set_server_handler(move |event: &Event, ctx: &RecordContext, url: Option<&str>| {
            server.lock().push((emission(event, ctx), url.map(String::from)));
        });

        recorder
    }

    fn local_levels(&self) -> Vec<Level> {
        self.local.lock().iter().map(|e| e.level).collect()
    }

    fn server_levels(&self) -> Vec<Level> {
        self.server.lock().iter().map(|(e, _)| e.level).collect()
    }
}

fn emission(event: &Event, ctx: &RecordContext) -> Emission {
    Emission {
        level: ctx.level,
        name: ctx.name.clone(),
        args: event.args(),
    }
}

fn emit_all(log: &Splogger, name: &str) {
    let logger = log.get(name);
    logger
        .debug("d")
        .info("i")
        .success("s")
        .time("t")
        .warning("w")
        .error("e");
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_warning_threshold_scenario() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Warning);
    let logger = log.get("app");

    logger.debug("x");
    assert!(recorder.local.lock().is_empty());

    logger.error("y");
    let local = recorder.local.lock();
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].level, Level::Error);
    assert_eq!(local[0].args, vec![serde_json::json!("y")]);
    assert_eq!(local[0].name.as_deref(), Some("app"));
}

#[test]
fn test_local_and_server_paths_are_independent() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Debug);
    log.set_server_level(Level::Error);

    emit_all(&log, "a");

    assert_eq!(
        recorder.local_levels(),
        vec![
            Level::Debug,
            Level::Info,
            Level::Success,
            Level::Time,
            Level::Warning,
            Level::Error
        ]
    );
    assert_eq!(recorder.server_levels(), vec![Level::Error]);
}

#[test]
fn test_server_only_emission() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Off);
    log.set_server_level(Level::Info);
    log.set_server_url(Some("http://collector/ingest".into()));

    log.get("a").info("only remote");

    assert!(recorder.local.lock().is_empty());
    let server = recorder.server.lock();
    assert_eq!(server.len(), 1);
    assert_eq!(server[0].1.as_deref(), Some("http://collector/ingest"));
}

#[test]
fn test_named_logger_diverges_until_fanout() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Info);
    let a = log.get("a");

    log.global_logger().set_level(Level::Error);
    a.info("still visible");
    assert_eq!(recorder.local_levels(), vec![Level::Info]);

    log.set_level(Level::Error);
    a.info("now hidden");
    assert_eq!(recorder.local_levels(), vec![Level::Info]);

    // Created after the sweep: picks up the current global value
    assert_eq!(log.get("b").level(), Level::Error);
}

#[test]
fn test_shared_instance_across_callers() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Debug);

    let first = log.get("shared");
    let second = log.get("shared");
    second.set_level(Level::Error);

    first.warning("hidden");
    assert!(recorder.local.lock().is_empty());
    assert!(first.ptr_eq(&second));
}

#[test]
fn test_timer_payloads() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Debug);
    let logger = log.get("t");

    logger.time("x").time_end("x");
    logger.time("").time_end("");

    let local = recorder.local.lock();
    assert_eq!(local.len(), 2);
    assert!(local.iter().all(|e| e.level == Level::Time));
    assert_eq!(local[0].args, vec!["x", "start"]);
    assert_eq!(local[1].args, vec!["x", "end"]);
}

#[test]
fn test_record_shape_reaches_handler() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Debug);

    log.get("ui").success(
        LogRecord::new("Saved")
            .with_data(serde_json::json!({"id": 1}))
            .with_title("Profile"),
    );

    let local = recorder.local.lock();
    assert_eq!(
        local[0].args,
        vec![
            serde_json::json!("Saved"),
            serde_json::json!({"id": 1}),
            serde_json::json!("Profile")
        ]
    );
}

#[test]
fn test_no_handlers_is_silent() {
    let log = Splogger::new();
    log.set_level(Level::Debug);
    log.set_server_level(Level::Debug);

    log.get("quiet").error("nobody listens");
    log.error("nobody listens");

    let (level, event) = log.get("quiet").last_invocation().unwrap();
    assert_eq!(level, Level::Error);
    assert_eq!(event, Event::Message(LogRecord::new("nobody listens")));
}

#[test]
fn test_clear_handlers_stops_routing() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Debug);

    log.info("before");
    log.clear_handlers();
    log.info("after");

    assert_eq!(recorder.local.lock().len(), 1);
}

#[test]
fn test_timer_event_invoked_directly() {
    let log = Splogger::new();
    let recorder = Recorder::install(&log);
    log.set_level(Level::Time);

    log.invoke(
        Level::Time,
        Event::Timer {
            label: "manual".into(),
            phase: TimerPhase::Start,
        },
    );
    log.debug("below");

    assert_eq!(recorder.local_levels(), vec![Level::Time]);
    assert_eq!(recorder.local.lock()[0].name, None);
}

// =============================================================================
// Properties
// =============================================================================

fn any_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_threshold_filters_by_rank(threshold in any_level(), level in any_level()) {
        let log = Splogger::new();
        let recorder = Recorder::install(&log);
        log.set_level(threshold);
        log.set_server_level(Level::Off);

        log.get("p").invoke(level, Event::Message(LogRecord::new("m")));

        let emitted = !recorder.local.lock().is_empty();
        prop_assert_eq!(emitted, level.rank() >= threshold.rank());
        prop_assert_eq!(emitted, log.get("p").enabled_for(level));
        prop_assert!(recorder.server.lock().is_empty() || level == Level::Off);
    }

    #[test]
    fn prop_paths_never_interfere(local in any_level(), server in any_level(), level in any_level()) {
        let log = Splogger::new();
        let recorder = Recorder::install(&log);
        log.set_level(local);
        log.set_server_level(server);

        log.get("p").invoke(level, Event::Message(LogRecord::new("m")));

        prop_assert_eq!(recorder.local.lock().len(), usize::from(level.passes(local)));
        prop_assert_eq!(recorder.server.lock().len(), usize::from(level.passes(server)));
    }
}
