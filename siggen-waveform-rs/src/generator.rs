//! The device main loop: acquire settings once, then generate forever.
//!
//! ```text
//! acquire_config ──► SignalGenerator::run
//!   amplitude          loop {
//!   DC offset            kind = mode.current()     // once per cycle
//!   frequency            synth.run_cycle(config, kind)
//!                        print pending mode change
//!                        print status if a period has passed
//!                      }
//! ```
//!
//! There is no shutdown path; the loop runs until reset.

use embedded_hal_async::delay::DelayNs;
use keypad_driver::{EntryError, KeySource, NumericEntry};

use crate::diagnostic::{Diagnostic, DiagnosticSink, StatusLine, StatusReporter};
use crate::mode::ModeSource;
use crate::output::SampleSink;
use crate::waveform::{
    pacing_delay_us, GeneratorConfig, Parameter, StatusConfig, Synthesizer,
};

/// Read amplitude, DC offset and frequency from the keypad, in that order.
///
/// Each value is re-requested until it lies in its range. An entry that
/// overflows is reported with [`Diagnostic::EntryTooLong`] and the same
/// parameter is asked for again.
///
/// # Errors
/// Only a failure of the key source itself ends acquisition early.
pub async fn acquire_config<K, D, G>(
    entry: &mut NumericEntry<K, D>,
    diagnostics: &mut G,
) -> Result<GeneratorConfig, K::Error>
where
    K: KeySource,
    D: DelayNs,
    G: DiagnosticSink + ?Sized,
{
    let mut values = [0u32; Parameter::ALL.len()];

    for (value, parameter) in values.iter_mut().zip(Parameter::ALL) {
        *value = loop {
            let result = entry
                .read_number(parameter.prompt(), parameter.range(), |event| {
                    diagnostics.emit(&Diagnostic::Entry(event))
                })
                .await;

            match result {
                Ok(accepted) => break accepted,
                Err(EntryError::Parse) => diagnostics.emit(&Diagnostic::EntryTooLong),
                Err(EntryError::Key(e)) => return Err(e),
            }
        };
    }

    let [amplitude_mv, dc_offset_mv, frequency_hz] = values;
    Ok(GeneratorConfig {
        amplitude_mv,
        dc_offset_mv,
        frequency_hz,
    })
}

/// Generation loop state.
///
/// Owns the synthesizer and the settings; borrows the mode shared with the
/// button handler.
pub struct SignalGenerator<'m, S, D, M> {
    synth: Synthesizer<S, D>,
    mode: &'m M,
    config: GeneratorConfig,
    status: StatusReporter,
}

impl<'m, S, D, M> SignalGenerator<'m, S, D, M>
where
    S: SampleSink,
    D: DelayNs,
    M: ModeSource,
{
    /// `now_ms` starts the first status period.
    pub fn new(
        synth: Synthesizer<S, D>,
        mode: &'m M,
        config: GeneratorConfig,
        status: StatusConfig,
        now_ms: u64,
    ) -> Self {
        Self {
            synth,
            mode,
            config,
            status: StatusReporter::new(status, now_ms),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn synth(&self) -> &Synthesizer<S, D> {
        &self.synth
    }

    /// Report conditions that hold for the whole run. Called once by
    /// [`run`](Self::run) before the first cycle.
    pub fn announce<G>(&self, diagnostics: &mut G)
    where
        G: DiagnosticSink + ?Sized,
    {
        if pacing_delay_us(self.config.frequency_hz) == 0 {
            diagnostics.emit(&Diagnostic::TimingUnderflow {
                frequency_hz: self.config.frequency_hz,
            });
        }
    }

    /// One pass of the loop: a full cycle, then any pending mode notice,
    /// then the status line if due. Returns the samples emitted.
    ///
    /// The shape is read once, before the cycle. A button press during the
    /// cycle takes effect on the next call.
    ///
    /// A failed sink write abandons the cycle (returning 0) but is not
    /// fatal; the next call starts a fresh cycle.
    pub async fn step<C, G>(&mut self, clock: &mut C, diagnostics: &mut G) -> u32
    where
        C: FnMut() -> u64,
        G: DiagnosticSink + ?Sized,
    {
        let kind = self.mode.current();
        let samples = match self.synth.run_cycle(&self.config, kind).await {
            Ok(samples) => samples,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("sample write failed, {} cycle abandoned", kind);
                0
            }
        };

        if let Some(changed) = self.mode.take_change() {
            diagnostics.emit(&Diagnostic::ModeChanged(changed));
        }

        if self.status.poll(clock()) {
            let line = StatusLine::new(&self.config, self.mode.current());
            diagnostics.emit(&Diagnostic::Status(line));
        }

        samples
    }

    /// Generate until reset.
    pub async fn run<C, G>(mut self, mut clock: C, diagnostics: &mut G)
    where
        C: FnMut() -> u64,
        G: DiagnosticSink + ?Sized,
    {
        self.announce(diagnostics);
        loop {
            self.step(&mut clock, diagnostics).await;
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
