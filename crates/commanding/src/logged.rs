//! Logged variants of commands and queries
//!
//! A logged wrapper runs exactly the same guard-then-run protocol as the plain
//! one and reports each transition to its injected [`ActionLogger`]:
//!
//! | transition | level       | handler message          | service message            |
//! |------------|-------------|--------------------------|----------------------------|
//! | entering   | information | `Handling a {name}`      | `Executing a {name}`       |
//! | rejected   | warning     | `Cannot handle a {name}` | `Cannot execute a {name}`  |
//! | completed  | information | `Handled a {name}`       | `Executed a {name}`        |
//! | failed     | error       | `Failed to handle a {name}` | `Failed to execute a {name}` |
//!
//! Parameterized invocations append ` with {request:?}` and attach the request
//! as JSON. Every template carries a stable numeric `event_id`. Logging never
//! changes the outcome.

use crate::action::{Action, ActionShape, Request};
use crate::command::Command;
use crate::errors::{ExErrorKind, ExecutionError};
use crate::execution::{Observer, Transition};
use crate::guard::GuardDecision;
use crate::logger::{ActionLogger, LogLevel, LogRecord};
use crate::query::Query;
use commanding_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_REJECTED, EVENT_START};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Message vocabulary of a logged wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// "Handling" / "Handled" / "Cannot handle" / "Failed to handle"
    Handler,
    /// "Executing" / "Executed" / "Cannot execute" / "Failed to execute"
    Service,
}

impl Flavor {
    fn verb(&self, transition: &Transition<'_>) -> &'static str {
        match (self, transition) {
            (Flavor::Handler, Transition::Entering) => "Handling",
            (Flavor::Handler, Transition::Rejected { .. }) => "Cannot handle",
            (Flavor::Handler, Transition::Completed) => "Handled",
            (Flavor::Handler, Transition::Failed { .. }) => "Failed to handle",
            (Flavor::Service, Transition::Entering) => "Executing",
            (Flavor::Service, Transition::Rejected { .. }) => "Cannot execute",
            (Flavor::Service, Transition::Completed) => "Executed",
            (Flavor::Service, Transition::Failed { .. }) => "Failed to execute",
        }
    }
}

/// Stable identifier of one message template
///
/// Four decimal digits: shape (1 command, 2 query), flavor (1 handler,
/// 2 service), form (0 bare, 1 with request) and transition (1 entering,
/// 2 completed, 3 rejected, 4 failed). "Cannot handle a {name} with
/// {request}" on a command is `1113`.
pub(crate) fn event_id(
    shape: ActionShape,
    flavor: Flavor,
    parameterized: bool,
    transition: Transition<'_>,
) -> u16 {
    let shape = match shape {
        ActionShape::Command => 1000,
        ActionShape::Query { .. } => 2000,
    };
    let flavor = match flavor {
        Flavor::Handler => 100,
        Flavor::Service => 200,
    };
    let form = if parameterized { 10 } else { 0 };
    let transition = match transition {
        Transition::Entering => 1,
        Transition::Completed => 2,
        Transition::Rejected { .. } => 3,
        Transition::Failed { .. } => 4,
    };
    shape + flavor + form + transition
}

/// Renders transitions of one invocation into log records
pub(crate) struct LogObserver<'a, Req> {
    logger: &'a dyn ActionLogger,
    flavor: Flavor,
    shape: ActionShape,
    action: &'a str,
    request: Option<&'a Req>,
}

impl<Req> Observer for LogObserver<'_, Req>
where
    Req: Request + fmt::Debug + Serialize,
{
    fn observe(&self, transition: Transition<'_>) {
        let (level, event, err_code, cause) = match transition {
            Transition::Entering => (LogLevel::Information, EVENT_START, None, None),
            Transition::Rejected { kind } => {
                (LogLevel::Warning, EVENT_REJECTED, Some(kind.code()), None)
            }
            Transition::Completed => (LogLevel::Information, EVENT_END, None, None),
            Transition::Failed { cause } => (
                LogLevel::Error,
                EVENT_END_ERROR,
                Some(ExErrorKind::CoreLogicFailed.code()),
                Some(cause.to_string()),
            ),
        };

        if !self.logger.is_enabled(level) {
            return;
        }

        let mut message = format!("{} a {}", self.flavor.verb(&transition), self.action);
        if let Some(request) = self.request {
            let _ = write!(message, " with {:?}", request);
        }

        self.logger.log(&LogRecord {
            level,
            event,
            event_id: event_id(self.shape, self.flavor, self.request.is_some(), transition),
            action: self.action,
            shape: self.shape.label(),
            message,
            // A request that fails to serialize is logged without its contents
            request: self.request.and_then(|r| serde_json::to_value(r).ok()),
            cause,
            err_code,
        });
    }
}

/// A [`Command`] whose invocations are logged
pub struct LoggedCommand<A, Req = ()>
where
    A: Action<Req, Output = ()>,
    Req: Request,
{
    inner: Command<A, Req>,
    logger: Arc<dyn ActionLogger>,
    flavor: Flavor,
}

impl<A, Req> LoggedCommand<A, Req>
where
    A: Action<Req, Output = ()>,
    Req: Request + fmt::Debug + Serialize,
{
    pub fn new(action: A, logger: Arc<dyn ActionLogger>, flavor: Flavor) -> Self {
        Command::new(action).logged(logger, flavor)
    }

    /// Logged command using the "Handling a ..." vocabulary
    pub fn handler(action: A, logger: Arc<dyn ActionLogger>) -> Self {
        Self::new(action, logger, Flavor::Handler)
    }

    /// Logged command using the "Executing a ..." vocabulary
    pub fn service(action: A, logger: Arc<dyn ActionLogger>) -> Self {
        Self::new(action, logger, Flavor::Service)
    }

    /// Replace the standard guard-failure reaction for this instance
    pub fn with_guard_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(ExecutionError, &Req) -> GuardDecision<A::Error> + Send + Sync + 'static,
    {
        self.inner = self.inner.with_guard_failure(hook);
        self
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn action(&self) -> &A {
        self.inner.action()
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn observer<'a>(&'a self, request: Option<&'a Req>) -> LogObserver<'a, Req> {
        LogObserver {
            logger: &*self.logger,
            flavor: self.flavor,
            shape: self.inner.gate.shape,
            action: self.inner.name(),
            request,
        }
    }

    /// Evaluate the guard for `request` without executing or logging
    pub async fn can_execute_with(&self, request: &Req) -> bool {
        self.inner.can_execute_with(request).await
    }

    /// Log, re-check the guard, then run the command with `request`
    ///
    /// # Errors
    ///
    /// Same as [`Command::execute_with`]; errors are logged, never replaced.
    pub async fn execute_with(&self, request: &Req) -> Result<(), A::Error> {
        let observer = self.observer(Some(request));
        self.inner.gate.run(request, true, &observer).await
    }
}

impl<A> LoggedCommand<A, ()>
where
    A: Action<(), Output = ()>,
{
    pub async fn can_execute(&self) -> bool {
        self.inner.can_execute().await
    }

    /// Log, re-check the guard, then run the command
    ///
    /// # Errors
    ///
    /// Same as [`Command::execute`]; errors are logged, never replaced.
    pub async fn execute(&self) -> Result<(), A::Error> {
        let observer = self.observer(None);
        self.inner.gate.run(&(), false, &observer).await
    }
}

impl<A, Req> Command<A, Req>
where
    A: Action<Req, Output = ()>,
    Req: Request + fmt::Debug + Serialize,
{
    /// Decorate this command with logging, keeping its guard-failure hook
    pub fn logged(self, logger: Arc<dyn ActionLogger>, flavor: Flavor) -> LoggedCommand<A, Req> {
        LoggedCommand {
            inner: self,
            logger,
            flavor,
        }
    }
}

/// A [`Query`] whose invocations are logged
pub struct LoggedQuery<A, Req = ()>
where
    A: Action<Req>,
    Req: Request,
{
    inner: Query<A, Req>,
    logger: Arc<dyn ActionLogger>,
    flavor: Flavor,
}

impl<A, Req> LoggedQuery<A, Req>
where
    A: Action<Req>,
    Req: Request + fmt::Debug + Serialize,
{
    pub fn new(action: A, logger: Arc<dyn ActionLogger>, flavor: Flavor) -> Self {
        Query::new(action).logged(logger, flavor)
    }

    /// Logged query using the "Handling a ..." vocabulary
    pub fn handler(action: A, logger: Arc<dyn ActionLogger>) -> Self {
        Self::new(action, logger, Flavor::Handler)
    }

    /// Logged query using the "Executing a ..." vocabulary
    pub fn service(action: A, logger: Arc<dyn ActionLogger>) -> Self {
        Self::new(action, logger, Flavor::Service)
    }

    /// Replace the standard guard-failure reaction for this instance
    pub fn with_guard_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(ExecutionError, &Req) -> GuardDecision<A::Error> + Send + Sync + 'static,
    {
        self.inner = self.inner.with_guard_failure(hook);
        self
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn action(&self) -> &A {
        self.inner.action()
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn observer<'a>(&'a self, request: Option<&'a Req>) -> LogObserver<'a, Req> {
        LogObserver {
            logger: &*self.logger,
            flavor: self.flavor,
            shape: self.inner.gate.shape,
            action: self.inner.name(),
            request,
        }
    }

    /// Evaluate the guard for `request` without executing or logging
    pub async fn can_execute_with(&self, request: &Req) -> bool {
        self.inner.can_execute_with(request).await
    }

    /// Log, re-check the guard, then run the query with `request`
    ///
    /// # Errors
    ///
    /// Same as [`Query::execute_with`]; errors are logged, never replaced.
    pub async fn execute_with(&self, request: &Req) -> Result<A::Output, A::Error> {
        let observer = self.observer(Some(request));
        self.inner.gate.run(request, true, &observer).await
    }
}

impl<A> LoggedQuery<A, ()>
where
    A: Action<()>,
{
    pub async fn can_execute(&self) -> bool {
        self.inner.can_execute().await
    }

    /// Log, re-check the guard, then run the query
    ///
    /// # Errors
    ///
    /// Same as [`Query::execute`]; errors are logged, never replaced.
    pub async fn execute(&self) -> Result<A::Output, A::Error> {
        let observer = self.observer(None);
        self.inner.gate.run(&(), false, &observer).await
    }
}

impl<A, Req> Query<A, Req>
where
    A: Action<Req>,
    Req: Request + fmt::Debug + Serialize,
{
    /// Decorate this query with logging, keeping its guard-failure hook
    pub fn logged(self, logger: Arc<dyn ActionLogger>, flavor: Flavor) -> LoggedQuery<A, Req> {
        LoggedQuery {
            inner: self,
            logger,
            flavor,
        }
    }
}
