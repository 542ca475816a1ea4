//! Configuration types
//!
//! The animation is configured once at startup. There is no persistence:
//! every power cycle starts from the compiled-in configuration.

pub mod types;

pub use types::*;
