//! Common test utilities module
//!
//! Provides shared utilities for tests including:
//! - Temporary CSV and configuration files
//! - A logger that records emitted messages

#![allow(dead_code)]

pub mod log_capture;
pub mod test_utils;

pub use log_capture::{capture_logs, CaptureLogger};
pub use test_utils::{create_test_csv, write_test_file, TempTestFile};
