use super::error::ConfigError;
use super::{AMPLITUDE_RANGE_MV, DC_OFFSET_RANGE_MV, FREQUENCY_RANGE_HZ};

// ── GeneratorConfig ──────────────────────────────────────────────────────

/// User-entered generator settings.
///
/// Built once at start-up from keypad entry and read by the synthesizer at
/// the top of every cycle. [`GeneratorConfig::new()`] enforces the closed
/// ranges; the synthesizer additionally floors `frequency_hz` at 1 so a
/// hand-built zero can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneratorConfig {
    /// Peak amplitude in millivolts. Range: 100–2500. Default: 1000.
    pub amplitude_mv: u32,
    /// DC offset in millivolts. Range: 50–1250. Default: 500.
    pub dc_offset_mv: u32,
    /// Output frequency in hertz. Range: 1–12 000 000. Default: 10.
    pub frequency_hz: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            amplitude_mv: 1000,
            dc_offset_mv: 500,
            frequency_hz: 10,
        }
    }
}

impl GeneratorConfig {
    /// Validate and build a configuration.
    ///
    /// ```
    /// use siggen::waveform::{ConfigError, GeneratorConfig};
    ///
    /// assert!(GeneratorConfig::new(1000, 500, 10).is_ok());
    /// assert_eq!(
    ///     GeneratorConfig::new(50, 500, 10),
    ///     Err(ConfigError::AmplitudeOutOfRange)
    /// );
    /// ```
    pub fn new(
        amplitude_mv: u32,
        dc_offset_mv: u32,
        frequency_hz: u32,
    ) -> Result<Self, ConfigError> {
        if !AMPLITUDE_RANGE_MV.contains(&amplitude_mv) {
            return Err(ConfigError::AmplitudeOutOfRange);
        }
        if !DC_OFFSET_RANGE_MV.contains(&dc_offset_mv) {
            return Err(ConfigError::DcOffsetOutOfRange);
        }
        if !FREQUENCY_RANGE_HZ.contains(&frequency_hz) {
            return Err(ConfigError::FrequencyOutOfRange);
        }

        Ok(Self {
            amplitude_mv,
            dc_offset_mv,
            frequency_hz,
        })
    }

    /// Frequency floored at 1 Hz.
    pub fn safe_frequency_hz(&self) -> u32 {
        self.frequency_hz.max(1)
    }
}

// ── OutputConfig ─────────────────────────────────────────────────────────

/// Scaling between millivolt duty values and sink codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputConfig {
    /// Output voltage, in millivolts, that maps to the sink's full-scale
    /// code. Default: 3300.
    pub reference_mv: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { reference_mv: 3300 }
    }
}

// ── StatusConfig ─────────────────────────────────────────────────────────

/// Periodic status reporting from the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusConfig {
    /// Minimum time between two status lines. Default: 1000.
    pub report_period_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            report_period_ms: 1000,
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
