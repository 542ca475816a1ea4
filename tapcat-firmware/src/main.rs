//! Tapcat - typing-driven cat animation firmware
//!
//! Firmware binary for RP2040-based split keyboards with a 128x32 SSD1306
//! OLED on each half. The primary half animates the cat from key activity;
//! the secondary half shows the status column.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C1;
use {defmt_rtt as _, panic_probe as _};

use tapcat_core::{init_rotation, ActivitySource, AnimationConfig};
use tapcat_hal::{FixedSplit, Role, Rotation, Side};

use crate::board::Board;
use crate::ssd1306::Ssd1306;
use crate::tasks::oled::Oled;

mod board;
mod channels;
mod ssd1306;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tapcat firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Side strap: pulled up on the left half, tied low on the right
    let side_pin = Input::new(p.PIN_28, Pull::Up);
    // VBUS sense: only the half plugged into the host sees USB power
    let vbus_pin = Input::new(p.PIN_24, Pull::Down);

    let split = FixedSplit {
        side: if side_pin.is_high() {
            Side::Left
        } else {
            Side::Right
        },
        role: if vbus_pin.is_high() {
            Role::Primary
        } else {
            Role::Secondary
        },
    };
    info!("Split half: {} {}", split.side, split.role);

    let config = AnimationConfig {
        activity: if cfg!(feature = "wpm") {
            ActivitySource::Wpm
        } else {
            ActivitySource::KeyPress
        },
        ..AnimationConfig::default()
    };
    info!("Animation config: {}", config);

    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C1, p.PIN_3, p.PIN_2, Irqs, i2c_config);

    let rotation = init_rotation(Rotation::R0, &split);
    let mut oled: Oled = Ssd1306::new(i2c);
    match oled.init(rotation).await {
        Ok(()) => info!("OLED initialized ({} degrees)", rotation.degrees()),
        Err(e) => warn!("OLED init failed: {}", e),
    }

    let key = Input::new(p.PIN_4, Pull::Up);

    unwrap!(spawner.spawn(tasks::key_task(key)));
    unwrap!(spawner.spawn(tasks::oled_task(oled, Board::new(split), config)));

    info!("All tasks spawned");
}
