//! Line-oriented user diagnostics and periodic status reporting.
//!
//! Everything the device tells its user (prompts, digit echo, range errors,
//! mode changes, status) is a [`Diagnostic`]. Its `Display` impl is the
//! line of text; a [`DiagnosticSink`] decides where the line goes. The
//! firmware forwards lines to defmt, tests collect them.

use core::fmt;

use keypad_driver::EntryEvent;

use crate::waveform::{GeneratorConfig, StatusConfig, WaveformKind};

/// One user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic<'a> {
    /// Prompt, echo, range error or acceptance from keypad entry.
    Entry(EntryEvent<'a>),
    /// The entry overflowed and was discarded; the prompt is repeated.
    EntryTooLong,
    /// The mode button selected a new shape.
    ModeChanged(WaveformKind),
    /// The configured frequency is above the pacing resolution.
    TimingUnderflow { frequency_hz: u32 },
    /// Periodic status.
    Status(StatusLine),
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::Entry(event) => fmt::Display::fmt(event, f),
            Diagnostic::EntryTooLong => f.write_str("Entry too long. Try again."),
            Diagnostic::ModeChanged(kind) => write!(f, "Waveform changed to: {}", kind),
            Diagnostic::TimingUnderflow { frequency_hz } => write!(
                f,
                "{} Hz is above the pacing resolution; samples go out as fast as possible",
                frequency_hz
            ),
            Diagnostic::Status(line) => fmt::Display::fmt(line, f),
        }
    }
}

/// Snapshot printed once per status period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLine {
    pub amplitude_mv: u32,
    pub dc_offset_mv: u32,
    pub frequency_hz: u32,
    pub waveform: WaveformKind,
}

impl StatusLine {
    pub fn new(config: &GeneratorConfig, waveform: WaveformKind) -> Self {
        Self {
            amplitude_mv: config.amplitude_mv,
            dc_offset_mv: config.dc_offset_mv,
            frequency_hz: config.frequency_hz,
            waveform,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Amplitude: {} mV, Offset: {} mV, Frequency: {} Hz, Waveform: {}",
            self.amplitude_mv, self.dc_offset_mv, self.frequency_hz, self.waveform
        )
    }
}

/// Destination for [`Diagnostic`] lines.
///
/// Emission is best-effort: a sink must not block the caller for long and
/// has no way to report failure.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>) {
        (**self).emit(diagnostic);
    }
}

// ── StatusReporter ───────────────────────────────────────────────────────

/// Decides when the next status line is due.
///
/// A report is due once at least `report_period_ms` has passed since the
/// previous one (or since construction). The period restarts from the time
/// of the report, not from the previous deadline.
#[derive(Debug, Clone, Copy)]
pub struct StatusReporter {
    period_ms: u64,
    last_ms: u64,
}

impl StatusReporter {
    pub fn new(config: StatusConfig, now_ms: u64) -> Self {
        Self {
            period_ms: config.report_period_ms,
            last_ms: now_ms,
        }
    }

    /// Returns `true` if a report is due at `now_ms`, and restarts the period.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) >= self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
