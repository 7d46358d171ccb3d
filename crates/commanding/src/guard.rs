//! Guard-failure hook
//!
//! When an action's guard returns false, the wrapper hands the standard
//! [`ExecutionError`] and the request to a per-instance hook. The standard hook
//! fails with that error; a custom hook may substitute a domain error or
//! explicitly let the core logic run anyway.

use crate::errors::{ExErrorKind, ExecutionError};
use std::fmt;
use std::sync::Arc;

/// What to do after the guard rejected an invocation
#[derive(Debug)]
pub enum GuardDecision<E> {
    /// Stop and return this error to the caller
    Fail(E),
    /// Run the core logic despite the rejected guard
    Proceed,
}

type HookFn<Req, E> = dyn Fn(ExecutionError, &Req) -> GuardDecision<E> + Send + Sync;

/// Per-instance reaction to a rejected guard
pub enum GuardFailureHook<Req, E> {
    /// Fail with the standard guard error
    Standard,
    /// Implementer-supplied reaction
    Custom(Arc<HookFn<Req, E>>),
}

impl<Req, E: From<ExecutionError>> GuardFailureHook<Req, E> {
    /// Wrap a closure as a custom hook
    pub fn custom<F>(hook: F) -> Self
    where
        F: Fn(ExecutionError, &Req) -> GuardDecision<E> + Send + Sync + 'static,
    {
        GuardFailureHook::Custom(Arc::new(hook))
    }

    /// Decide the outcome of a rejected guard
    pub fn decide(&self, error: ExecutionError, request: &Req) -> GuardDecision<E> {
        match self {
            GuardFailureHook::Standard => GuardDecision::Fail(error.into()),
            GuardFailureHook::Custom(hook) => hook(error, request),
        }
    }

    /// Classification reported on the rejection event
    pub fn kind(&self) -> ExErrorKind {
        match self {
            GuardFailureHook::Standard => ExErrorKind::GuardFailed,
            GuardFailureHook::Custom(_) => ExErrorKind::CustomGuardFailure,
        }
    }
}

impl<Req, E> Default for GuardFailureHook<Req, E> {
    fn default() -> Self {
        GuardFailureHook::Standard
    }
}

impl<Req, E> Clone for GuardFailureHook<Req, E> {
    fn clone(&self) -> Self {
        match self {
            GuardFailureHook::Standard => GuardFailureHook::Standard,
            GuardFailureHook::Custom(hook) => GuardFailureHook::Custom(Arc::clone(hook)),
        }
    }
}

impl<Req, E> fmt::Debug for GuardFailureHook<Req, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardFailureHook::Standard => f.write_str("Standard"),
            GuardFailureHook::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
