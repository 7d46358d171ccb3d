//! Core types shared across the commanding facilities
//!
//! This crate provides foundational types used by both the execution
//! wrappers and the logging facility:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
