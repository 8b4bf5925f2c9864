//! Components - Reusable UI Components
//!
//! Window chrome shared by every page.

pub mod layout;
