//! Sample sinks: where synthesized samples end up.
//!
//! The synthesizer works in millivolts. [`duty_to_code`] maps a duty value
//! onto the sink's native range, and a [`SampleSink`] puts the code on the
//! wire. Two sinks are provided:
//!
//! - [`ParallelDac`] — N GPIO lines feeding an external R-2R ladder, LSB
//!   first. Eight lines give an 8-bit DAC with full scale 255.
//! - [`PwmSink`] — any embedded-hal PWM channel; full scale is its
//!   `max_duty_cycle()`.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Destination for output codes.
pub trait SampleSink {
    /// Error produced by a failed write.
    type Error;

    /// Largest code the sink accepts; code 0 is 0 mV, this is the reference.
    fn full_scale(&self) -> u16;

    /// Emit one code. Codes are already clamped to `0..=full_scale()`.
    fn write(&mut self, code: u16) -> Result<(), Self::Error>;
}

/// Scale a duty value onto `0..=full_scale`.
///
/// `round(duty_mv / reference_mv · full_scale)`, saturating at both ends.
/// Duty values below 0 mV or above the reference are clipped.
///
/// ```
/// use siggen::output::duty_to_code;
///
/// assert_eq!(duty_to_code(1650.0, 3300, 255), 128);
/// assert_eq!(duty_to_code(5000.0, 3300, 255), 255);
/// assert_eq!(duty_to_code(-20.0, 3300, 255), 0);
/// ```
pub fn duty_to_code(duty_mv: f32, reference_mv: u32, full_scale: u16) -> u16 {
    let scaled = libm::roundf(duty_mv / reference_mv as f32 * full_scale as f32);
    // NaN casts to 0.
    scaled.clamp(0.0, full_scale as f32) as u16
}

// ── ParallelDac ──────────────────────────────────────────────────────────

/// `N`-bit parallel DAC driven directly from GPIO lines.
///
/// `pins[0]` carries the least significant bit.
pub struct ParallelDac<P, const N: usize> {
    pins: [P; N],
}

impl<P, const N: usize> ParallelDac<P, N>
where
    P: OutputPin,
{
    /// Take ownership of the data lines, LSB first.
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Give the data lines back.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P, const N: usize> SampleSink for ParallelDac<P, N>
where
    P: OutputPin,
{
    type Error = P::Error;

    fn full_scale(&self) -> u16 {
        ((1u32 << N.min(16)) - 1) as u16
    }

    fn write(&mut self, code: u16) -> Result<(), Self::Error> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if bit < 16 && (code >> bit) & 1 == 1 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }
}

// ── PwmSink ──────────────────────────────────────────────────────────────

/// PWM channel used as a DAC behind an external RC filter.
pub struct PwmSink<P> {
    pwm: P,
}

impl<P> PwmSink<P>
where
    P: SetDutyCycle,
{
    /// Wrap a configured PWM channel.
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Give the PWM channel back.
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P> SampleSink for PwmSink<P>
where
    P: SetDutyCycle,
{
    type Error = P::Error;

    fn full_scale(&self) -> u16 {
        self.pwm.max_duty_cycle()
    }

    fn write(&mut self, code: u16) -> Result<(), Self::Error> {
        self.pwm.set_duty_cycle(code)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
