//! The logger capability consumed by logged actions
//!
//! Logged wrappers never touch a global logging helper; they are handed an
//! [`ActionLogger`] at construction. [`TracingLogger`] forwards records to
//! `tracing`, which is what applications normally inject.

use crate::log_action_event;
use tracing::Level;

/// Severity of an action log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Information,
    Warning,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Information => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// One structured event emitted around an action invocation
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    /// Canonical event name (`start`, `rejected`, `end`, `end_error`)
    pub event: &'static str,
    /// Stable identifier of the message template, e.g. `1101` for
    /// "Handling a {name}" on a command; unique per shape, flavor, form and
    /// transition
    pub event_id: u16,
    /// Diagnostic name of the action
    pub action: &'a str,
    /// `command` or `query`
    pub shape: &'static str,
    /// Rendered message, e.g. "Handling a SyncOrders with SyncRequest { id: 1 }"
    pub message: String,
    /// Structured request contents, parameterized variants only
    pub request: Option<serde_json::Value>,
    /// Rendered underlying error, failure events only
    pub cause: Option<String>,
    pub err_code: Option<&'static str>,
}

/// Sink for action log records
///
/// Implementations must not panic; a failing sink is a defect of the sink.
pub trait ActionLogger: Send + Sync {
    /// Fast-path check; records at disabled levels are never built
    fn is_enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, record: &LogRecord<'_>);
}

/// [`ActionLogger`] emitting `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ActionLogger for TracingLogger {
    fn is_enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Debug => tracing::enabled!(Level::DEBUG),
            LogLevel::Information => tracing::enabled!(Level::INFO),
            LogLevel::Warning => tracing::enabled!(Level::WARN),
            LogLevel::Error => tracing::enabled!(Level::ERROR),
        }
    }

    fn log(&self, record: &LogRecord<'_>) {
        match record.level {
            LogLevel::Debug => log_action_event!(Level::DEBUG, record),
            LogLevel::Information => log_action_event!(Level::INFO, record),
            LogLevel::Warning => log_action_event!(Level::WARN, record),
            LogLevel::Error => log_action_event!(Level::ERROR, record),
        }
    }
}
