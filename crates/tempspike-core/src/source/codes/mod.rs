//! Codes-file source implementation.
//!
//! This module provides a `CaptureSource` backed by plain-text capture
//! logs in the demodulator's `{bits}hex` code notation. It handles file
//! I/O and line-level parsing, emitting one `CaptureEvent` per data
//! line for the decode driver.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::CodesFileSource;
