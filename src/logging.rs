//! Structured log lines routed through the `log` facade.
//!
//! Each event is one JSON object carrying `level`, `event` and any extra fields.
//! On wasm32 the sink is the browser console.

use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }

    fn as_log_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init(level: LogLevel) {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level.as_log_level()).ok();
}

fn event_line(level: LogLevel, event: &str, fields: Value) -> String {
    let mut payload = Map::new();
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload).to_string()
}

pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    let record_level = level.as_log_level();
    if record_level > log::max_level() {
        return;
    }

    log::log!(record_level, "{}", event_line(level, event, fields));
}

/// Test logger that keeps each thread's lines apart, so parallel tests only
/// see their own events.
#[cfg(test)]
pub(crate) mod capture {
    use std::cell::RefCell;
    use std::sync::Once;

    use serde_json::Value;

    thread_local! {
        static LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            LINES.with(|lines| lines.borrow_mut().push(record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INSTALL: Once = Once::new();

    pub fn install() {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).ok();
            log::set_max_level(log::LevelFilter::Debug);
        });
        LINES.with(|lines| lines.borrow_mut().clear());
    }

    /// `event` names of the lines logged on this thread since `install`.
    pub fn events() -> Vec<String> {
        LINES.with(|lines| {
            lines
                .borrow()
                .iter()
                .filter_map(|line| serde_json::from_str::<Value>(line).ok())
                .filter_map(|value| value["event"].as_str().map(str::to_string))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_line_merges_fields_after_envelope() {
        let line = event_line(
            LogLevel::Info,
            "presentation_mounted",
            json!({ "reveal_delay_ms": 100 }),
        );
        let parsed: Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "presentation_mounted");
        assert_eq!(parsed["reveal_delay_ms"], 100);
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let line = event_line(LogLevel::Warn, "presentation_mount_failed", json!("oops"));
        let parsed: Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed.as_object().map(Map::len), Some(2));
    }

    #[test]
    fn log_event_reaches_the_installed_logger() {
        capture::install();

        log_event(LogLevel::Debug, "decor_generated", json!({ "mode": "memoized" }));

        assert_eq!(capture::events(), vec!["decor_generated".to_string()]);
    }

    #[test]
    fn level_names_round_trip_case_insensitively() {
        assert_eq!(LogLevel::from_str(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info);
    }
}
