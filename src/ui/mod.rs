//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Warning formatting and display

pub mod output;
