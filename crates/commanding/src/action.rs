//! The action contract shared by commands and queries
//!
//! An action is a guard (`can_execute`) plus core logic (`on_execute`). The
//! wrappers in [`crate::command`], [`crate::query`] and [`crate::logged`] own
//! the guard-then-run protocol; implementers only supply the two halves.

use crate::errors::ExecutionError;
use async_trait::async_trait;
use std::fmt;

/// Marker for values passed to parameterized actions
///
/// Carries no behaviour of its own. Plain wrappers accept any request; the
/// logged wrappers additionally need `Debug` for the message and `Serialize`
/// for the structured request field. Parameterless actions use `()`.
pub trait Request: Send + Sync {}

impl Request for () {}

/// An executable unit: a guard and the core logic it protects
///
/// Parameterless actions implement `Action` (request `()`), parameterized ones
/// implement `Action<TheirRequest>`. Commands set `Output = ()`.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use commanding::{Action, ExecutionError};
///
/// struct Ping;
///
/// #[async_trait]
/// impl Action for Ping {
///     type Output = &'static str;
///     type Error = ExecutionError;
///
///     async fn on_execute(&self, _request: &()) -> Result<Self::Output, Self::Error> {
///         Ok("pong")
///     }
/// }
///
/// assert_eq!(Ping.name(), "Ping");
/// ```
#[async_trait]
pub trait Action<Req: Request = ()>: Send + Sync {
    /// Value produced by the core logic
    type Output: Send;

    /// Error type of the core logic; guard failures convert into it
    type Error: From<ExecutionError> + fmt::Display + Send;

    /// Diagnostic name of the action
    ///
    /// Defaults to the implementing type's name without its module path.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }

    /// Guard deciding whether the core logic may run
    ///
    /// May consult external services but must tolerate being called more than
    /// once per invocation. Permissive by default.
    async fn can_execute(&self, _request: &Req) -> bool {
        true
    }

    /// The action's core logic
    async fn on_execute(&self, request: &Req) -> Result<Self::Output, Self::Error>;
}

/// Whether an action is a command or a query
///
/// Queries carry their response type so guard failures of the two shapes stay
/// distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionShape {
    Command,
    Query { response_type: &'static str },
}

impl ActionShape {
    /// Canonical label used in structured log fields
    pub fn label(&self) -> &'static str {
        match self {
            ActionShape::Command => commanding_core_types::schema::SHAPE_COMMAND,
            ActionShape::Query { .. } => commanding_core_types::schema::SHAPE_QUERY,
        }
    }

    /// Build the standard guard failure for this shape
    pub fn guard_failed(&self, action: &str, request_type: Option<&'static str>) -> ExecutionError {
        match *self {
            ActionShape::Command => ExecutionError::CommandGuardFailed {
                action: action.to_string(),
                request_type,
            },
            ActionShape::Query { response_type } => ExecutionError::QueryGuardFailed {
                action: action.to_string(),
                request_type,
                response_type,
            },
        }
    }
}

/// Type name without module paths, generic arguments included
///
/// `alloc::vec::Vec<my_app::Order>` becomes `Vec<Order>`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Only the leading path can be trimmed without allocating; nested paths in
    // generic arguments are left in place.
    let base_end = full.find('<').unwrap_or(full.len());
    match full[..base_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Heartbeat;

    #[async_trait]
    impl Action for Heartbeat {
        type Output = ();
        type Error = ExecutionError;

        async fn on_execute(&self, _request: &()) -> Result<(), ExecutionError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        assert_eq!(Heartbeat.name(), "Heartbeat");
    }

    #[test]
    fn test_short_type_name_strips_paths() {
        assert_eq!(short_type_name::<Heartbeat>(), "Heartbeat");
        assert_eq!(short_type_name::<bool>(), "bool");
        assert_eq!(short_type_name::<String>(), "String");
        assert!(short_type_name::<Vec<u8>>().starts_with("Vec<"));
    }

    #[test]
    fn test_default_guard_is_permissive() {
        assert!(tokio_test::block_on(Heartbeat.can_execute(&())));
    }

    #[test]
    fn test_shape_labels() {
        assert_eq!(ActionShape::Command.label(), "command");
        assert_eq!(
            ActionShape::Query {
                response_type: "bool"
            }
            .label(),
            "query"
        );
    }

    #[test]
    fn test_shape_builds_matching_guard_error() {
        let err = ActionShape::Query {
            response_type: "bool",
        }
        .guard_failed("Lookup", Some("Key"));
        assert_eq!(
            err,
            ExecutionError::QueryGuardFailed {
                action: "Lookup".to_string(),
                request_type: Some("Key"),
                response_type: "bool",
            }
        );
    }
}
