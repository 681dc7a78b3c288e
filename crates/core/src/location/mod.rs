//! Cached geolocation reading with a staleness window.

pub mod store;
