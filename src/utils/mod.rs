//! Utility modules for common functionality.
//!
//! Logging configuration, clipboard access and the terminal cleanup guard.

pub mod clipboard;
pub mod context;
pub mod logger;
