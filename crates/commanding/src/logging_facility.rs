//! Structured logging facility
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - The `log_action_event!` macro that renders action log records as
//!   `tracing` events with canonical fields
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use commanding::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Production);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
