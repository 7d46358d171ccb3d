//! Canonical action logging macro
//!
//! Every action event passes through this macro so captured and shipped
//! events always carry the same field set.

/// Emit a [`LogRecord`](crate::logger::LogRecord) as a `tracing` event
///
/// The level must be a `tracing::Level` constant. Optional fields are left
/// out of the event when absent.
///
/// # Example
///
/// ```
/// use commanding::log_action_event;
/// use commanding::logger::{LogLevel, LogRecord};
///
/// let record = LogRecord {
///     level: LogLevel::Information,
///     event: "start",
///     event_id: 1201,
///     action: "RebuildIndex",
///     shape: "command",
///     message: "Executing a RebuildIndex".to_string(),
///     request: None,
///     cause: None,
///     err_code: None,
/// };
/// log_action_event!(tracing::Level::INFO, &record);
/// ```
#[macro_export]
macro_rules! log_action_event {
    ($level:expr, $record:expr) => {{
        let record: &$crate::logger::LogRecord<'_> = $record;
        let request = record.request.as_ref().map(|value| value.to_string());
        tracing::event!(
            $level,
            component = commanding_core_types::schema::COMPONENT,
            op = record.action,
            event = record.event,
            event_id = record.event_id,
            shape = record.shape,
            request = request.as_deref(),
            cause = record.cause.as_deref(),
            err_code = record.err_code,
            "{}",
            record.message
        );
    }};
}
