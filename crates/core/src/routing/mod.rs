//! Route protection rules for browser pages.

pub mod gate;
