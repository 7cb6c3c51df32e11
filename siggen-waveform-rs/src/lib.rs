//! Keypad-configured function generator core.
//!
//! The firmware reads amplitude, DC offset and frequency from a 4×4 keypad,
//! then emits sine, triangle, sawtooth or square cycles into a DAC or PWM
//! sink forever. A push button steps through the shapes while the output
//! runs.
//!
//! # Modules
//!
//! - **[`waveform`]**: shapes, settings and the per-cycle [`Synthesizer`].
//! - **[`output`]**: the [`SampleSink`] trait and its parallel-DAC and PWM
//!   implementations.
//! - **[`mode`]**: the shape index shared with the button handler.
//! - **[`diagnostic`]**: user-facing lines and the status timer.
//! - **[`generator`]**: keypad acquisition and the generation loop.
//!
//! # Quick start
//!
//! ```ignore
//! use siggen::generator::{acquire_config, SignalGenerator};
//! use siggen::mode::ModeIndex;
//!
//! static MODE: ModeIndex = ModeIndex::new();
//!
//! let config = acquire_config(&mut entry, &mut sink).await?;
//! let synth = Synthesizer::new(dac, embassy_time::Delay, OutputConfig::default());
//! SignalGenerator::new(synth, &MODE, config, StatusConfig::default(), now_ms())
//!     .run(now_ms, &mut sink)
//!     .await;
//! ```
//!
//! # Features
//!
//! - **`defmt`**: [`defmt::Format`] on configuration and shape types, and
//!   debug/warn logging from the loop.
//!
//! [`Synthesizer`]: waveform::Synthesizer
//! [`SampleSink`]: output::SampleSink

#![cfg_attr(not(test), no_std)]

pub mod diagnostic;
pub mod generator;
pub mod mode;
pub mod output;
pub mod waveform;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use generator::{acquire_config, SignalGenerator};
pub use mode::{ModeIndex, ModeSource};
pub use waveform::{GeneratorConfig, WaveformKind};
