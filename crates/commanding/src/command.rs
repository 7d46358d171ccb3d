//! Plain commands: guard, then run, no result
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use commanding::{Action, Command, ExecutionError};
//!
//! struct Purge { enabled: bool }
//!
//! #[async_trait]
//! impl Action for Purge {
//!     type Output = ();
//!     type Error = ExecutionError;
//!
//!     async fn can_execute(&self, _request: &()) -> bool {
//!         self.enabled
//!     }
//!
//!     async fn on_execute(&self, _request: &()) -> Result<(), ExecutionError> {
//!         Ok(())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let purge = Command::new(Purge { enabled: false });
//! let err = purge.execute().await.unwrap_err();
//! assert_eq!(err.to_string(), "Failed to execute command Purge.");
//! # });
//! ```

use crate::action::{Action, ActionShape, Request};
use crate::errors::ExecutionError;
use crate::execution::Gate;
use crate::guard::{GuardDecision, GuardFailureHook};

/// An action with no return value, executed behind its guard
pub struct Command<A, Req = ()>
where
    A: Action<Req, Output = ()>,
    Req: Request,
{
    pub(crate) gate: Gate<A, Req>,
}

impl<A, Req> Command<A, Req>
where
    A: Action<Req, Output = ()>,
    Req: Request,
{
    pub fn new(action: A) -> Self {
        Self {
            gate: Gate::new(action, ActionShape::Command),
        }
    }

    /// Replace the standard guard-failure reaction for this instance
    pub fn with_guard_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(ExecutionError, &Req) -> GuardDecision<A::Error> + Send + Sync + 'static,
    {
        self.gate.on_guard_failure = GuardFailureHook::custom(hook);
        self
    }

    pub fn name(&self) -> &str {
        self.gate.action.name()
    }

    pub fn action(&self) -> &A {
        &self.gate.action
    }

    pub fn into_inner(self) -> A {
        self.gate.action
    }

    /// Evaluate the guard for `request` without executing
    pub async fn can_execute_with(&self, request: &Req) -> bool {
        self.gate.action.can_execute(request).await
    }

    /// Re-check the guard, then run the command with `request`
    ///
    /// # Errors
    ///
    /// Returns the guard-failure hook's error when the guard rejects the
    /// request, or the command's own error unchanged when its logic fails.
    pub async fn execute_with(&self, request: &Req) -> Result<(), A::Error> {
        self.gate.run(request, true, &()).await
    }
}

impl<A> Command<A, ()>
where
    A: Action<(), Output = ()>,
{
    pub async fn can_execute(&self) -> bool {
        self.gate.action.can_execute(&()).await
    }

    /// Re-check the guard, then run the command
    ///
    /// # Errors
    ///
    /// Returns the guard-failure hook's error when the guard rejects, or the
    /// command's own error unchanged when its logic fails.
    pub async fn execute(&self) -> Result<(), A::Error> {
        self.gate.run(&(), false, &()).await
    }
}
