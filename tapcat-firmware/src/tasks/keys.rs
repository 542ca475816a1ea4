//! Key press input task
//!
//! Watches the active-low key line and reports each press to the OLED task.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use crate::board::now_ms;
use crate::channels::{count_key_press, KEY_PRESSED};

/// Contact bounce settle time (ms)
const DEBOUNCE_MS: u64 = 5;

#[embassy_executor::task]
pub async fn key_task(mut key: Input<'static>) {
    info!("Key task started");

    loop {
        key.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        if key.is_low() {
            let now = now_ms();
            KEY_PRESSED.signal(now);
            count_key_press();
            trace!("Key press at {}ms", now);

            key.wait_for_high().await;
            Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
        }
    }
}
