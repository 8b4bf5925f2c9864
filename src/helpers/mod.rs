//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod fs;

pub use action::*;
pub use fs::*;
