//! Input handling module
//!
//! Translates terminal key events into the abstract keys the screen state machine understands.

pub mod keys;

pub use keys::{translate_key, Key};
