//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod keys;
pub mod oled;

pub use keys::key_task;
pub use oled::oled_task;
