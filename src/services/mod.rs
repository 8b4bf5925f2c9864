//! Service Layer
//!
//! Everything that touches the outside world on behalf of the UI: loading
//! page definitions and carrying out card actions.

mod navigator;
mod page_store;

pub use navigator::*;
pub use page_store::*;
