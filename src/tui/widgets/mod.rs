//! Reusable UI widgets
//!
//! Contains components that can be used across multiple views.

pub mod selection;
