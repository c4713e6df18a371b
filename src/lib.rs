//! Logdog - structured logging setup and log browser for Go projects
//!
//! Detects the project in the working directory, installs a JSON logger into it,
//! and browses, views and prunes the log files it writes.

pub mod app;
pub mod config;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod input;
pub mod logging;
pub mod store;
pub mod tui;
