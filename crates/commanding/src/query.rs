//! Plain queries: guard, then run, return the response

use crate::action::{short_type_name, Action, ActionShape, Request};
use crate::errors::ExecutionError;
use crate::execution::Gate;
use crate::guard::{GuardDecision, GuardFailureHook};

/// An action returning `A::Output`, executed behind its guard
///
/// Guard failures use [`ExecutionError::QueryGuardFailed`], which records the
/// response type.
pub struct Query<A, Req = ()>
where
    A: Action<Req>,
    Req: Request,
{
    pub(crate) gate: Gate<A, Req>,
}

impl<A, Req> Query<A, Req>
where
    A: Action<Req>,
    Req: Request,
{
    pub fn new(action: A) -> Self {
        Self {
            gate: Gate::new(
                action,
                ActionShape::Query {
                    response_type: short_type_name::<A::Output>(),
                },
            ),
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

    /// Re-check the guard, then run the query with `request`
    ///
    /// # Errors
    ///
    /// Returns the guard-failure hook's error when the guard rejects the
    /// request, or the query's own error unchanged when its logic fails.
    pub async fn execute_with(&self, request: &Req) -> Result<A::Output, A::Error> {
        self.gate.run(request, true, &()).await
    }
}

impl<A> Query<A, ()>
where
    A: Action<()>,
{
    pub async fn can_execute(&self) -> bool {
        self.gate.action.can_execute(&()).await
    }

    /// Re-check the guard, then run the query
    ///
    /// # Errors
    ///
    /// Returns the guard-failure hook's error when the guard rejects, or the
    /// query's own error unchanged when its logic fails.
    pub async fn execute(&self) -> Result<A::Output, A::Error> {
        self.gate.run(&(), false, &()).await
    }
}
