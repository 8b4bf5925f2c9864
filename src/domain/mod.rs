//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI rendering and describe pages, cards,
//! options and the actions derived from them.

pub mod action;
pub mod card;
pub mod config;
pub mod image;
pub mod option;
pub mod page;
