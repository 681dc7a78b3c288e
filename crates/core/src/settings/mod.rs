//! Settings modal state.

pub mod context;
