//! Layout Components
//!
//! Header and log panel around the page area.

pub mod header;
pub mod log_panel;
