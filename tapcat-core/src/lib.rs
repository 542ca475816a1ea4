//! Board-agnostic core logic for the Tapcat OLED animation
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Frame store (compiled-in run-length encoded cat frames)
//! - Animation selector (tap / paws / idle from time since last keystroke)
//! - Activity tracking (key presses or WPM increases)
//! - Windowed WPM estimate for hosts that only count key presses
//! - Per-tick render entry point with display sleep
//! - Status glyph rendering for the secondary half
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod activity;
pub mod animation;
pub mod config;
pub mod frames;
pub mod render;
pub mod status;
pub mod wpm;

pub use activity::ActivityTracker;
pub use animation::{AnimationState, FrameTimer, Pose, Selector};
pub use config::{ActivitySource, AnimationConfig, ConfigError};
pub use frames::CatFrames;
pub use render::{init_rotation, RenderOutcome, Renderer};
pub use status::{Layer, Modifiers, StatusRenderer, StatusSnapshot};
pub use wpm::WpmMeter;
