//! Application Layer
//!
//! Contains app initialization, window management, global entities, the
//! handler registry and the workspace.

pub mod application;
pub mod entities;
pub mod handlers;
pub mod workspace;
