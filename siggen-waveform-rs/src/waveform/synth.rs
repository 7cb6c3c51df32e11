use embedded_hal_async::delay::DelayNs;

use super::config::{GeneratorConfig, OutputConfig};
use super::kind::WaveformKind;
use crate::output::{duty_to_code, SampleSink};

/// Samples emitted per cycle: one per `360 / frequency` degrees of phase,
/// i.e. `frequency` samples (floored at 1).
pub fn samples_per_cycle(frequency_hz: u32) -> u32 {
    frequency_hz.max(1)
}

/// Delay between samples, in microseconds: `1_000_000 / frequency / 360`,
/// truncated.
///
/// Zero from 2778 Hz upwards. At that point pacing is left to the sink
/// and the executor.
///
/// ```
/// use siggen::waveform::pacing_delay_us;
///
/// assert_eq!(pacing_delay_us(1), 2777);
/// assert_eq!(pacing_delay_us(10), 277);
/// assert_eq!(pacing_delay_us(3000), 0);
/// ```
pub fn pacing_delay_us(frequency_hz: u32) -> u32 {
    1_000_000 / frequency_hz.max(1) / 360
}

/// Produces one waveform cycle at a time into a [`SampleSink`].
///
/// # Example
///
/// ```ignore
/// use siggen::output::ParallelDac;
/// use siggen::waveform::{GeneratorConfig, OutputConfig, Synthesizer, WaveformKind};
///
/// let mut synth = Synthesizer::new(ParallelDac::new(dac_pins), embassy_time::Delay, OutputConfig::default());
/// synth.run_cycle(&GeneratorConfig::default(), WaveformKind::Sine).await?;
/// ```
pub struct Synthesizer<S, D> {
    sink: S,
    delay: D,
    output: OutputConfig,
}

impl<S, D> Synthesizer<S, D>
where
    S: SampleSink,
    D: DelayNs,
{
    pub fn new(sink: S, delay: D, output: OutputConfig) -> Self {
        Self {
            sink,
            delay,
            output,
        }
    }

    /// Emit one full cycle of `kind` and return the number of samples.
    ///
    /// Phase runs over `i · 360 / f` for `i` in `0..f`, so every cycle
    /// starts at 0° and never reaches 360°. `kind` and `config` are fixed for
    /// the whole cycle.
    ///
    /// After each sample the synthesizer sleeps [`pacing_delay_us`]; when
    /// that is zero it yields to the executor instead so other tasks keep
    /// running.
    ///
    /// # Errors
    /// Returns the sink's error from the first failed write; the rest of the
    /// cycle is abandoned.
    pub async fn run_cycle(
        &mut self,
        config: &GeneratorConfig,
        kind: WaveformKind,
    ) -> Result<u32, S::Error> {
        let samples = samples_per_cycle(config.frequency_hz);
        let delay_us = pacing_delay_us(config.frequency_hz);
        let full_scale = self.sink.full_scale();

        for i in 0..samples {
            // f64 keeps the last phase of a 12 MHz cycle below 360°.
            let phase_deg = (i as f64 * 360.0 / samples as f64) as f32;
            let duty_mv = kind.duty_mv(phase_deg, config);
            self.sink
                .write(duty_to_code(duty_mv, self.output.reference_mv, full_scale))?;

            if delay_us > 0 {
                self.delay.delay_us(delay_us).await;
            } else {
                embassy_futures::yield_now().await;
            }
        }

        Ok(samples)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give the sink and delay back to the caller.
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
