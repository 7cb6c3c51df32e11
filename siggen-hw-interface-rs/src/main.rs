//! siggen-hw-interface
//!
//! Keypad → settings → waveform firmware for the Raspberry Pi Pico 2.
//!
//! 1. At boot the user types amplitude, DC offset and frequency on the 4×4
//!    keypad, each finished with `D`. Prompts and echoes go out over RTT.
//! 2. The main task then emits whole waveform cycles into the DAC, forever.
//! 3. The mode button steps sine → triangle → sawtooth → square. The button
//!    task only bumps the shared mode; the main task prints the change after
//!    the cycle in progress finishes.
//! 4. A status line is printed once per second.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use keypad_driver::{KeyMatrix, KeypadConfig, KeypadError, NumericEntry};
use siggen::diagnostic::{Diagnostic, DiagnosticSink};
use siggen::generator::{acquire_config, SignalGenerator};
use siggen::mode::{ModeIndex, ModeSource};
use siggen::output::SampleSink;
use siggen::waveform::{GeneratorConfig, OutputConfig, StatusConfig, Synthesizer};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Active waveform shape. Written by the button task, read by the main loop.
static MODE: ModeIndex = ModeIndex::new();

/// Pause before retrying acquisition after a keypad failure.
const ACQUIRE_RETRY_MS: u64 = 500;

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Sends every user-facing line to the RTT log.
struct DefmtSink;

impl DiagnosticSink for DefmtSink {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>) {
        info!("{}", Display2Format(diagnostic));
    }
}

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Steps the waveform on every press of the mode button.
///
/// Nothing is printed here; the main loop reports the change between cycles.
#[embassy_executor::task]
async fn button_task(mut button: Input<'static>) {
    loop {
        button.wait_for_rising_edge().await;
        MODE.advance();
    }
}

/// Runs the generation loop on whichever sink the build selected.
async fn generate<S: SampleSink>(sink: S, config: GeneratorConfig) {
    let synth = Synthesizer::new(sink, Delay, OutputConfig::default());
    SignalGenerator::new(synth, &MODE, config, StatusConfig::default(), now_ms())
        .run(now_ms, &mut DefmtSink)
        .await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("siggen-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // DAC D0..D7 → GP0..GP7    (LSB first, R-2R ladder)
    // PWM out    → GP15        (pwm-output feature only)
    // MODE btn   → GP16        active-high, pull-down enabled
    // Key rows   → GP18..GP21  pull-up enabled
    // Key cols   → GP22, GP26, GP27, GP28   idle high
    // ———————————————————————————————————————————————————————————————————————

    let button = Input::new(p.PIN_16, Pull::Down);
    spawner.spawn(unwrap!(button_task(button)));

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

    let keypad_config = KeypadConfig::default();
    // GPIO errors are Infallible on the RP2350.
    let keypad = match KeyMatrix::new(rows, columns, Delay, keypad_config) {
        Ok(keypad) => keypad,
        Err(KeypadError::Pin(never)) => match never {},
    };
    let mut entry = NumericEntry::new(keypad, Delay, keypad_config.poll_interval_ms);

    // —— Parameter entry ————————————————————————————————————————————————————

    let config = loop {
        match acquire_config(&mut entry, &mut DefmtSink).await {
            Ok(config) => break config,
            Err(e) => {
                error!("Keypad failed: {}", e);
                Timer::after_millis(ACQUIRE_RETRY_MS).await;
            }
        }
    };
    info!("Configured: {}", config);

    // —— Generation —————————————————————————————————————————————————————————

    #[cfg(not(feature = "pwm-output"))]
    {
        use siggen::output::ParallelDac;

        let dac = ParallelDac::new([
            Output::new(p.PIN_0, Level::Low),
            Output::new(p.PIN_1, Level::Low),
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
        ]);
        generate(dac, config).await;
    }

    #[cfg(feature = "pwm-output")]
    {
        use embassy_rp::pwm::{self, Pwm};
        use siggen::output::PwmSink;

        let mut pwm_config = pwm::Config::default();
        pwm_config.top = u16::MAX;
        // GP15 is channel B of PWM slice 7.
        let (_, channel) = Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, pwm_config).split();
        generate(PwmSink::new(unwrap!(channel)), config).await;
    }
}
