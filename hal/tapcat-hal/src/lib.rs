//! Tapcat Hardware Abstraction Layer
//!
//! This crate defines the narrow interfaces through which the animation core
//! talks to the keyboard firmware hosting it. The core never touches timers,
//! display buses or key matrices directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Host firmware (tapcat-firmware, QMK..) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tapcat-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tapcat-core (frame selection, render)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::Clock`] - Monotonic millisecond time source
//! - [`display::RawDisplay`] - Raw display memory writes and power control
//! - [`display::GlyphSink`] - Font glyph output for status rendering
//! - [`split::SplitInfo`] - Which half of a split keyboard this is
//! - [`input::WpmSource`] - Typing speed sample

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod display;
pub mod input;
pub mod split;

// Re-export key traits at crate root for convenience
pub use clock::{Clock, Timestamp};
pub use display::{GlyphSink, RawDisplay, Rotation};
pub use input::WpmSource;
pub use split::{FixedSplit, Role, Side, SplitInfo};
