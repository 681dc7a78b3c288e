//! OAuth callback screens: outcome evaluation and the delayed redirect.

pub mod ports;
pub mod screen;
