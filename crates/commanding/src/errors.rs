use thiserror::Error;

/// Canonical classification of execution failures
///
/// Only `GuardFailed` is ever materialised as an [`ExecutionError`]. The other
/// two kinds describe failures that travel as the action's own error type and
/// exist so log events can classify them with a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// The guard rejected the invocation and the standard hook raised the error
    GuardFailed,
    /// The action's core logic failed; the original error is propagated as-is
    CoreLogicFailed,
    /// The guard rejected the invocation and a custom hook is handling it
    CustomGuardFailure,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::GuardFailed => "ERR_GUARD_FAILED",
            ExErrorKind::CoreLogicFailed => "ERR_CORE_LOGIC_FAILED",
            ExErrorKind::CustomGuardFailure => "ERR_CUSTOM_GUARD_FAILURE",
        }
    }
}

/// Error raised when an action's guard refuses to let it run
///
/// Command-shaped and query-shaped failures are separate variants, so two
/// actions sharing a name still produce distinguishable errors. The query
/// variant also records the declared response type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// A command's guard returned false
    #[error("Failed to execute command {action}.")]
    CommandGuardFailed {
        action: String,
        /// Request type for parameterized commands
        request_type: Option<&'static str>,
    },

    /// A query's guard returned false
    #[error("Failed to execute query {action} returning {response_type}.")]
    QueryGuardFailed {
        action: String,
        /// Request type for parameterized queries
        request_type: Option<&'static str>,
        response_type: &'static str,
    },
}

impl ExecutionError {
    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        ExErrorKind::GuardFailed
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Name of the action whose guard failed
    pub fn action(&self) -> &str {
        match self {
            ExecutionError::CommandGuardFailed { action, .. }
            | ExecutionError::QueryGuardFailed { action, .. } => action,
        }
    }

    /// Request type name, if the failing action was parameterized
    pub fn request_type(&self) -> Option<&'static str> {
        match self {
            ExecutionError::CommandGuardFailed { request_type, .. }
            | ExecutionError::QueryGuardFailed { request_type, .. } => *request_type,
        }
    }

    /// Response type name, if the failing action was a query
    pub fn response_type(&self) -> Option<&'static str> {
        match self {
            ExecutionError::CommandGuardFailed { .. } => None,
            ExecutionError::QueryGuardFailed { response_type, .. } => Some(response_type),
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, ExecutionError::CommandGuardFailed { .. })
    }

    pub fn is_query(&self) -> bool {
        matches!(self, ExecutionError::QueryGuardFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ExErrorKind::GuardFailed.code(), "ERR_GUARD_FAILED");
        assert_eq!(ExErrorKind::CoreLogicFailed.code(), "ERR_CORE_LOGIC_FAILED");
        assert_eq!(
            ExErrorKind::CustomGuardFailure.code(),
            "ERR_CUSTOM_GUARD_FAILURE"
        );
    }

    #[test]
    fn test_command_guard_failure_display() {
        let err = ExecutionError::CommandGuardFailed {
            action: "ArchiveOrder".to_string(),
            request_type: None,
        };
        assert_eq!(err.to_string(), "Failed to execute command ArchiveOrder.");
        assert_eq!(err.action(), "ArchiveOrder");
        assert_eq!(err.code(), "ERR_GUARD_FAILED");
        assert!(err.is_command());
        assert_eq!(err.response_type(), None);
    }

    #[test]
    fn test_query_guard_failure_carries_response_type() {
        let err = ExecutionError::QueryGuardFailed {
            action: "FindOrder".to_string(),
            request_type: Some("OrderId"),
            response_type: "Order",
        };
        assert_eq!(
            err.to_string(),
            "Failed to execute query FindOrder returning Order."
        );
        assert!(err.is_query());
        assert_eq!(err.request_type(), Some("OrderId"));
        assert_eq!(err.response_type(), Some("Order"));
    }

    #[test]
    fn test_same_name_different_shape_is_distinguishable() {
        let command = ExecutionError::CommandGuardFailed {
            action: "Sync".to_string(),
            request_type: None,
        };
        let query = ExecutionError::QueryGuardFailed {
            action: "Sync".to_string(),
            request_type: None,
            response_type: "bool",
        };
        assert_ne!(command, query);
        assert_eq!(command.action(), query.action());
    }
}
