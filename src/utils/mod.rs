//! Utility functions and helpers for gemini-gateway.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and API key masking.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
