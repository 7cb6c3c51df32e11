//! Simple keypad example
//!
//! Demonstrates basic usage of the keypad-driver crate on the Raspberry Pi
//! Pico 2. Scans the 4×4 matrix every poll interval and logs each key via
//! defmt, then reads one number terminated with `D`.
//!
//! # Wiring
//!
//! | Signal     | Pico 2 Pin | Notes              |
//! |------------|------------|--------------------|
//! | Row 0..3   | GP18..GP21 | Pull-up enabled    |
//! | Column 0   | GP22       | Idle high          |
//! | Column 1   | GP26       | Idle high          |
//! | Column 2   | GP27       | Idle high          |
//! | Column 3   | GP28       | Idle high          |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use keypad_driver::{KeyMatrix, KeySource, KeypadConfig, NumericEntry, TERMINATOR};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Matrix lines ---
    let rows = [
        Input::new(p.PIN_18, Pull::Up),
        Input::new(p.PIN_19, Pull::Up),
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
    ];
    let columns = [
        Output::new(p.PIN_22, Level::High),
        Output::new(p.PIN_26, Level::High),
        Output::new(p.PIN_27, Level::High),
        Output::new(p.PIN_28, Level::High),
    ];

    let config = KeypadConfig::default();
    let mut keypad = unwrap!(KeyMatrix::new(rows, columns, Delay, config));

    info!("Keypad example started; press keys, {} moves on", TERMINATOR);

    // Raw scanning: log every key until the terminator is seen.
    loop {
        match keypad.next_key().await {
            Ok(Some(key)) if key == TERMINATOR => break,
            Ok(Some(key)) => info!("Key: {}", key),
            Ok(None) => {}
            Err(e) => error!("Scan failed: {}", e),
        }
        Timer::after_millis(config.poll_interval_ms as u64).await;
    }

    // Numeric entry on top of the same matrix.
    let mut entry = NumericEntry::new(keypad, Delay, config.poll_interval_ms);
    loop {
        let result = entry
            .read_number("Enter a number", 0..=9999, |event| {
                info!("{}", Display2Format(&event))
            })
            .await;

        match result {
            Ok(value) => info!("Read {}", value),
            Err(e) => error!("Entry failed: {}", e),
        }
    }
}
