//! Features - Vertical Feature Slices
//!
//! Each feature contains its page element and a gpui-free controller.

pub mod cards;
pub mod page;
pub mod select;
