/// Errors that can occur when building a [`GeneratorConfig`](super::GeneratorConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Amplitude outside [`AMPLITUDE_RANGE_MV`](super::AMPLITUDE_RANGE_MV).
    AmplitudeOutOfRange,
    /// DC offset outside [`DC_OFFSET_RANGE_MV`](super::DC_OFFSET_RANGE_MV).
    DcOffsetOutOfRange,
    /// Frequency outside [`FREQUENCY_RANGE_HZ`](super::FREQUENCY_RANGE_HZ).
    FrequencyOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ConfigError::AmplitudeOutOfRange => f.write_str("amplitude out of range"),
            ConfigError::DcOffsetOutOfRange => f.write_str("DC offset out of range"),
            ConfigError::FrequencyOutOfRange => f.write_str("frequency out of range"),
        }
    }
}
