//! Access token port

pub mod ports;
