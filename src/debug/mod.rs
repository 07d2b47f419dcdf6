//! Debug utilities for flowstack.
//!
//! The layout engine reports its passes through `tracing`. Nothing is printed
//! until a subscriber is installed; [`logging::install_tracing`] sets up a
//! console subscriber suitable for development.

pub mod logging;

pub use logging::{install_tracing, set_log_level};
