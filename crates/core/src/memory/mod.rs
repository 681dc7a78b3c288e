//! Memory settings: backend port, error type and the stateful controller
//! that the settings UI drives.

pub mod controller;
pub mod error;
pub mod ports;
