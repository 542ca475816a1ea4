//! Display geometry and frame buffers for Tapcat
//!
//! This crate provides:
//! - Geometry constants for the 128x32 page-addressed OLED
//! - `Canvas`, a raw frame buffer implementing `RawDisplay` and `FrameSink`
//! - `GlyphGrid`, a character buffer implementing `GlyphSink`
//!
//! # Architecture
//!
//! Firmware drivers keep a `Canvas` as their frame buffer and push its pages
//! to the panel after each tick. Tests use the same buffers to inspect what
//! the core drew.

#![no_std]

pub mod canvas;
pub mod geometry;
pub mod text;

// Re-export key types
pub use canvas::Canvas;
pub use geometry::{text_dimensions, CANVAS_LEN, HEIGHT, PAGES, WIDTH};
pub use text::GlyphGrid;
