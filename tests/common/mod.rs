//! Common test utilities and fixtures for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: credentials files, list payloads and a ready-made client
//! - `log_capture`: tracing capture for log assertions
//! - `logger`: Structured test logging infrastructure

pub mod fixtures;
pub mod log_capture;
pub mod logger;
