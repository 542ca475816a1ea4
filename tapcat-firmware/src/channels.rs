//! Inter-task communication
//!
//! Static embassy-sync primitives shared between the key and OLED tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU32, Ordering};

use tapcat_hal::Timestamp;

/// Latest key press timestamp (ms since boot)
///
/// Only the newest press matters to the activity tracker, so a signal that
/// overwrites an unread value is enough.
pub static KEY_PRESSED: Signal<CriticalSectionRawMutex, Timestamp> = Signal::new();

/// Key presses since the WPM meter last sampled
static KEY_COUNT: AtomicU32 = AtomicU32::new(0);

/// Count one key press for the WPM meter
pub fn count_key_press() {
    KEY_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// Take the key press count, resetting it to zero
pub fn take_key_count() -> u32 {
    KEY_COUNT.swap(0, Ordering::Relaxed)
}
