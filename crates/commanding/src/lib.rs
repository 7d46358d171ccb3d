//! Commanding - guard-then-act execution for commands and queries
//!
//! Every action is a guard ([`Action::can_execute`]) plus core logic
//! ([`Action::on_execute`]). Wrappers own the protocol:
//! - [`Command`] and [`Query`] re-check the guard on every execution, raise
//!   [`ExecutionError`] (or a custom hook's error) when it fails, and return
//!   core-logic errors unchanged
//! - [`LoggedCommand`] and [`LoggedQuery`] add structured start / rejected /
//!   end / error events through an injected [`ActionLogger`]
//!
//! Parameterless actions use `()` as their request and are driven with
//! `execute()`; parameterized ones use `execute_with(&request)`.

pub mod action;
pub mod command;
pub mod errors;
mod execution;
pub mod guard;
pub mod logged;
pub mod logger;
pub mod logging_facility;
pub mod query;

// Re-export commonly used types
pub use action::{short_type_name, Action, ActionShape, Request};
pub use command::Command;
pub use errors::{ExErrorKind, ExecutionError};
pub use guard::{GuardDecision, GuardFailureHook};
pub use logged::{Flavor, LoggedCommand, LoggedQuery};
pub use logger::{ActionLogger, LogLevel, LogRecord, TracingLogger};
pub use query::Query;
