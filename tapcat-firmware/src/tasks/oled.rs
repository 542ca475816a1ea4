//! OLED refresh task
//!
//! Drives the renderer at the display refresh cadence and pushes the result
//! to the panel. The renderer itself is synchronous; only the bus transfer
//! awaits.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Ticker};

use tapcat_core::config::REFRESH_INTERVAL_MS;
use tapcat_core::{AnimationConfig, Pose, Renderer, StatusSnapshot, WpmMeter};
use tapcat_hal::{Clock, SplitInfo, WpmSource};

use crate::board::Board;
use crate::channels::{take_key_count, KEY_PRESSED};
use crate::ssd1306::Ssd1306;

pub type Oled = Ssd1306<I2c<'static, I2C1, Async>>;

/// Render loop for one half
///
/// The primary half animates the cat on the panel. The secondary half keeps
/// its panel blank: the status screen is glyph codes for a host font this
/// board does not carry, so it only goes to the trace log.
#[embassy_executor::task]
pub async fn oled_task(mut oled: Oled, mut board: Board, config: AnimationConfig) {
    info!("OLED task started ({})", board.role());

    let mut renderer = match Renderer::new(config, board.now()) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Invalid animation config: {}", e);
            return;
        }
    };

    // Status comes over the split link on real boards; this one has none
    let status = StatusSnapshot::default();

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_INTERVAL_MS as u64));
    let mut meter = WpmMeter::new(board.now());
    let mut last_pose: Option<Pose> = None;
    let mut was_asleep = false;

    loop {
        ticker.next().await;

        if let Some(pressed_at) = KEY_PRESSED.try_take() {
            renderer.register_key_press(pressed_at);
        }
        board.set_wpm(meter.record(take_key_count(), board.now()));

        renderer.task(&board, &mut oled, &status);

        if board.is_primary() {
            let asleep = renderer.is_asleep();
            if asleep != was_asleep {
                if asleep {
                    info!(
                        "Display asleep after {}ms idle",
                        renderer.config().display_timeout_ms
                    );
                } else {
                    info!("Display awake");
                }
                was_asleep = asleep;
            }

            let elapsed = board.elapsed_since(renderer.activity().last_activity());
            let pose = Pose::from_elapsed(elapsed, renderer.config().frame_duration_ms);
            if !asleep && last_pose != Some(pose) {
                debug!("Pose {} (wpm {})", pose, board.current_wpm());
                last_pose = Some(pose);
            }
        } else if oled.glyphs().is_dirty() {
            trace!("Status glyphs {=[u8]:02x}", &oled.glyphs().codes()[..]);
            oled.glyphs_mut().mark_clean();
        }

        if let Err(e) = oled.sync().await {
            warn!("OLED write failed: {}", e);
        }
    }
}
