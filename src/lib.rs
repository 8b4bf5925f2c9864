//! Console UI Library
//!
//! A desktop console whose pages are described by JSON definitions: card
//! grids that link out or navigate between pages, and select controls that
//! report their choice to a named handler.

pub mod app;
pub mod assets;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
