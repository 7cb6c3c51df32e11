//! Waveform shapes, generator settings and the per-cycle synthesizer.
//!
//! # Signal path
//!
//! ```text
//! GeneratorConfig ─┐
//!                  ├─► duty (mV) ─► duty_to_code ─► SampleSink
//! WaveformKind  ───┘        ▲
//!                           └── phase 0° … <360°, `frequency` samples per cycle
//! ```
//!
//! One call to [`Synthesizer::run_cycle`] sweeps the phase once. The shape is
//! fixed for the whole sweep; a mode change reaches the output on the next
//! cycle.
//!
//! # Pacing
//!
//! Samples are spaced by `1_000_000 / frequency / 360` µs, truncated. The
//! truncation is a known precision limit: at 2778 Hz and above the delay is
//! zero and samples go out as fast as the sink accepts them (see
//! [`pacing_delay_us`]).

mod config;
mod error;
mod kind;
mod synth;

use core::ops::RangeInclusive;

pub use config::{GeneratorConfig, OutputConfig, StatusConfig};
pub use error::ConfigError;
pub use kind::WaveformKind;
pub use synth::{pacing_delay_us, samples_per_cycle, Synthesizer};

/// Accepted amplitude, in millivolts (inclusive).
pub const AMPLITUDE_RANGE_MV: RangeInclusive<u32> = 100..=2500;

/// Accepted DC offset, in millivolts (inclusive).
pub const DC_OFFSET_RANGE_MV: RangeInclusive<u32> = 50..=1250;

/// Accepted output frequency, in hertz (inclusive).
pub const FREQUENCY_RANGE_HZ: RangeInclusive<u32> = 1..=12_000_000;

/// The three user-entered settings, in the order they are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    Amplitude,
    DcOffset,
    Frequency,
}

impl Parameter {
    /// Acquisition order.
    pub const ALL: [Parameter; 3] = [Parameter::Amplitude, Parameter::DcOffset, Parameter::Frequency];

    /// Prompt shown before entry.
    pub fn prompt(self) -> &'static str {
        match self {
            Parameter::Amplitude => "Enter amplitude in mV",
            Parameter::DcOffset => "Enter DC offset in mV",
            Parameter::Frequency => "Enter frequency in Hz",
        }
    }

    /// Closed range the entered value must fall in.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Parameter::Amplitude => AMPLITUDE_RANGE_MV,
            Parameter::DcOffset => DC_OFFSET_RANGE_MV,
            Parameter::Frequency => FREQUENCY_RANGE_HZ,
        }
    }
}
