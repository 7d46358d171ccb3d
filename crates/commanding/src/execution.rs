//! The guard-then-run protocol shared by every wrapper
//!
//! Each invocation walks `Idle -> CheckingGuard -> {GuardFailed | Running ->
//! {Succeeded | Failed}}` and reports its transitions to an [`Observer`].
//! Plain wrappers use the no-op observer; logged wrappers use
//! the log observer in [`crate::logged`].

use crate::action::{short_type_name, Action, ActionShape, Request};
use crate::errors::ExErrorKind;
use crate::guard::{GuardDecision, GuardFailureHook};
use std::fmt;
use std::marker::PhantomData;

/// Observable step of a single invocation
#[derive(Clone, Copy)]
pub(crate) enum Transition<'a> {
    /// About to evaluate the guard
    Entering,
    /// The guard returned false; `kind` says which hook handles it
    Rejected { kind: ExErrorKind },
    /// Core logic returned successfully
    Completed,
    /// Core logic returned an error, which is propagated unchanged
    Failed { cause: &'a dyn fmt::Display },
}

impl fmt::Debug for Transition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Entering => f.write_str("Entering"),
            Transition::Rejected { kind } => write!(f, "Rejected({kind:?})"),
            Transition::Completed => f.write_str("Completed"),
            Transition::Failed { cause } => write!(f, "Failed({cause})"),
        }
    }
}

/// Receives transitions; must not influence the outcome
pub(crate) trait Observer: Send + Sync {
    fn observe(&self, transition: Transition<'_>);
}

/// Observer used by the plain wrappers
impl Observer for () {
    fn observe(&self, _transition: Transition<'_>) {}
}

/// An action paired with its shape and guard-failure hook
pub(crate) struct Gate<A, Req>
where
    A: Action<Req>,
    Req: Request,
{
    pub(crate) action: A,
    pub(crate) shape: ActionShape,
    pub(crate) on_guard_failure: GuardFailureHook<Req, A::Error>,
    _request: PhantomData<fn(&Req)>,
}

impl<A, Req> Gate<A, Req>
where
    A: Action<Req>,
    Req: Request,
{
    pub(crate) fn new(action: A, shape: ActionShape) -> Self {
        Self {
            action,
            shape,
            on_guard_failure: GuardFailureHook::Standard,
            _request: PhantomData,
        }
    }

    /// Run one invocation
    ///
    /// `parameterized` controls whether the standard guard error records the
    /// request type.
    pub(crate) async fn run<O>(
        &self,
        request: &Req,
        parameterized: bool,
        observer: &O,
    ) -> Result<A::Output, A::Error>
    where
        O: Observer + ?Sized,
    {
        observer.observe(Transition::Entering);

        if !self.action.can_execute(request).await {
            observer.observe(Transition::Rejected {
                kind: self.on_guard_failure.kind(),
            });
            let error = self.shape.guard_failed(
                self.action.name(),
                parameterized.then(short_type_name::<Req>),
            );
            match self.on_guard_failure.decide(error, request) {
                GuardDecision::Fail(err) => return Err(err),
                GuardDecision::Proceed => {
                    tracing::debug!(
                        op = self.action.name(),
                        "guard rejected, hook chose to proceed"
                    );
                }
            }
        }

        match self.action.on_execute(request).await {
            Ok(output) => {
                observer.observe(Transition::Completed);
                Ok(output)
            }
            Err(err) => {
                observer.observe(Transition::Failed { cause: &err });
                Err(err)
            }
        }
    }
}
