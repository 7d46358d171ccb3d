//! Shared fixtures for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use commanding::{Action, ActionLogger, ExecutionError, LogLevel, LogRecord, Request};
use mockall::automock;
use serde::Serialize;
use std::sync::Mutex;
use thiserror::Error;

// ---------- Requests and errors ----------

#[derive(Debug, Clone, Serialize)]
pub struct TestRequest {
    pub id: i64,
}

impl Request for TestRequest {}

pub fn invalid_request() -> TestRequest {
    TestRequest { id: 0 }
}

pub fn valid_request() -> TestRequest {
    TestRequest { id: 1 }
}

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("aggregate failure: {0}")]
    Aggregate(String),

    #[error("{0}")]
    OutOfRange(String),
}

// ---------- Collaborating service ----------

/// Collaborator the service-backed fixtures delegate to
#[automock]
#[async_trait]
pub trait TestService: Send + Sync {
    async fn can_execute(&self) -> bool;
    async fn execute(&self) -> Result<(), TestError>;
    async fn execute_with_result(&self) -> Result<bool, TestError>;
}

/// Service whose guard always answers `allow`, any number of times
pub fn service_with_guard(allow: bool) -> MockTestService {
    let mut service = MockTestService::new();
    service.expect_can_execute().return_const(allow);
    service
}

// ---------- Actions ----------

/// Parameterless command delegating to the service
pub struct ServiceCommand {
    pub service: MockTestService,
}

#[async_trait]
impl Action for ServiceCommand {
    type Output = ();
    type Error = TestError;

    async fn can_execute(&self, _request: &()) -> bool {
        self.service.can_execute().await
    }

    async fn on_execute(&self, _request: &()) -> Result<(), TestError> {
        self.service.execute().await
    }
}

/// Parameterized command: service guard and `id > 0`
pub struct TypedServiceCommand {
    pub service: MockTestService,
}

#[async_trait]
impl Action<TestRequest> for TypedServiceCommand {
    type Output = ();
    type Error = TestError;

    async fn can_execute(&self, request: &TestRequest) -> bool {
        self.service.can_execute().await && request.id > 0
    }

    async fn on_execute(&self, _request: &TestRequest) -> Result<(), TestError> {
        self.service.execute().await
    }
}

/// Parameterless query delegating to the service
pub struct ServiceQuery {
    pub service: MockTestService,
}

#[async_trait]
impl Action for ServiceQuery {
    type Output = bool;
    type Error = TestError;

    async fn can_execute(&self, _request: &()) -> bool {
        self.service.can_execute().await
    }

    async fn on_execute(&self, _request: &()) -> Result<bool, TestError> {
        self.service.execute_with_result().await
    }
}

/// Parameterized query: service guard and `id > 0`
pub struct TypedServiceQuery {
    pub service: MockTestService,
}

#[async_trait]
impl Action<TestRequest> for TypedServiceQuery {
    type Output = bool;
    type Error = TestError;

    async fn can_execute(&self, request: &TestRequest) -> bool {
        self.service.can_execute().await && request.id > 0
    }

    async fn on_execute(&self, _request: &TestRequest) -> Result<bool, TestError> {
        self.service.execute_with_result().await
    }
}

/// Parameterless query with the default guard, always `true`
pub struct ParameterlessQuery;

#[async_trait]
impl Action for ParameterlessQuery {
    type Output = bool;
    type Error = ExecutionError;

    async fn on_execute(&self, _request: &()) -> Result<bool, ExecutionError> {
        Ok(true)
    }
}

/// Parameterized query guarded by `id > 0`, always `true`
pub struct ParameterizedQuery;

#[async_trait]
impl Action<TestRequest> for ParameterizedQuery {
    type Output = bool;
    type Error = TestError;

    async fn can_execute(&self, request: &TestRequest) -> bool {
        request.id > 0
    }

    async fn on_execute(&self, _request: &TestRequest) -> Result<bool, TestError> {
        Ok(true)
    }
}

/// Parameterized command guarded by `id > 0`, paired with a range hook in tests
pub struct RangeCheckedCommand;

#[async_trait]
impl Action<TestRequest> for RangeCheckedCommand {
    type Output = ();
    type Error = TestError;

    async fn can_execute(&self, request: &TestRequest) -> bool {
        request.id > 0
    }

    async fn on_execute(&self, _request: &TestRequest) -> Result<(), TestError> {
        Ok(())
    }
}

/// Parameterized command with the default guard
pub struct PermissiveCommand;

#[async_trait]
impl Action<TestRequest> for PermissiveCommand {
    type Output = ();
    type Error = ExecutionError;

    async fn on_execute(&self, _request: &TestRequest) -> Result<(), ExecutionError> {
        Ok(())
    }
}

/// Hook replacing the standard guard error with a range error
pub fn out_of_range(_: ExecutionError, _: &TestRequest) -> commanding::GuardDecision<TestError> {
    commanding::GuardDecision::Fail(TestError::OutOfRange(
        "id should be more than zero.".to_string(),
    ))
}

// ---------- Logger ----------

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub level: LogLevel,
    pub event: &'static str,
    pub event_id: u16,
    pub action: String,
    pub shape: &'static str,
    pub message: String,
    pub request: Option<serde_json::Value>,
    pub cause: Option<String>,
    pub err_code: Option<&'static str>,
}

/// Logger keeping every record in memory
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<Entry>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.entries().iter().map(|e| e.event).collect()
    }

    pub fn event_ids(&self) -> Vec<u16> {
        self.entries().iter().map(|e| e.event_id).collect()
    }

    /// True if a record with exactly this level and message was logged
    pub fn received(&self, level: LogLevel, message: &str) -> bool {
        self.entries()
            .iter()
            .any(|e| e.level == level && e.message == message)
    }

    /// True if a record at `level` contains `fragment` in its message
    pub fn received_containing(&self, level: LogLevel, fragment: &str) -> bool {
        self.entries()
            .iter()
            .any(|e| e.level == level && e.message.contains(fragment))
    }
}

impl ActionLogger for RecordingLogger {
    fn log(&self, record: &LogRecord<'_>) {
        self.entries.lock().unwrap().push(Entry {
            level: record.level,
            event: record.event,
            event_id: record.event_id,
            action: record.action.to_string(),
            shape: record.shape,
            message: record.message.clone(),
            request: record.request.clone(),
            cause: record.cause.clone(),
            err_code: record.err_code,
        });
    }
}
