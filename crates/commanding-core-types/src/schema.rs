//! Canonical schema constants for structured action logging
//!
//! These constants keep event names and field keys consistent between the
//! emitting side and anything that inspects captured events.

/// Value of the `component` field on every action event
pub const COMPONENT: &str = "commanding";

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_EVENT_ID: &str = "event_id";
pub const FIELD_SHAPE: &str = "shape";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_REQUEST: &str = "request";
pub const FIELD_CAUSE: &str = "cause";

// Error fields
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names, one per terminal or entry transition
pub const EVENT_START: &str = "start";
pub const EVENT_REJECTED: &str = "rejected";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Action shapes
pub const SHAPE_COMMAND: &str = "command";
pub const SHAPE_QUERY: &str = "query";
