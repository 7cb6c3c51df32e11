use core::f32::consts::{FRAC_PI_2, PI};
use core::fmt;

use super::config::GeneratorConfig;

/// Output waveform shape.
///
/// The variants form a cycle in declaration order; the mode button steps
/// through it with [`next()`](Self::next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaveformKind {
    #[default]
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl WaveformKind {
    /// Number of shapes.
    pub const COUNT: usize = 4;

    /// Every shape, in cycle order.
    pub const ALL: [WaveformKind; Self::COUNT] = [
        WaveformKind::Sine,
        WaveformKind::Triangle,
        WaveformKind::Sawtooth,
        WaveformKind::Square,
    ];

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Shape at `index`, wrapping modulo [`COUNT`](Self::COUNT).
    ///
    /// ```
    /// use siggen::waveform::WaveformKind;
    ///
    /// assert_eq!(WaveformKind::from_index(2), WaveformKind::Sawtooth);
    /// assert_eq!(WaveformKind::from_index(5), WaveformKind::Triangle);
    /// ```
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[index as usize % Self::COUNT]
    }

    /// Following shape in the cycle (`Square` wraps to `Sine`).
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Lower-case display name.
    pub const fn name(self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Triangle => "triangle",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::Square => "square",
        }
    }

    /// Instantaneous output, in millivolts, at `phase_deg` (0 ≤ φ < 360).
    ///
    /// | Shape    | Duty                                  |
    /// |----------|---------------------------------------|
    /// | Sine     | `A·(sin φ / 2 + ½) + offset`          |
    /// | Triangle | `(2A/π)·asin(sin φ) + offset`         |
    /// | Sawtooth | `(−2A/π)·atan(1 / tan(φ/2)) + offset` |
    /// | Square   | `(A if φ < 180 else 0) + offset`      |
    ///
    /// Triangle and sawtooth swing below the offset and may go negative;
    /// the sink scaling saturates them.
    pub fn duty_mv(self, phase_deg: f32, config: &GeneratorConfig) -> f32 {
        let amplitude = config.amplitude_mv as f32;
        let offset = config.dc_offset_mv as f32;
        let radians = phase_deg.to_radians();

        match self {
            WaveformKind::Sine => amplitude * (libm::sinf(radians) / 2.0 + 0.5) + offset,
            WaveformKind::Triangle => {
                (2.0 * amplitude / PI) * libm::asinf(libm::sinf(radians)) + offset
            }
            WaveformKind::Sawtooth => (-2.0 * amplitude / PI) * arc_cot_half(radians) + offset,
            WaveformKind::Square => {
                let high = if phase_deg < 180.0 { amplitude } else { 0.0 };
                high + offset
            }
        }
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `atan(1 / tan(φ/2))`.
///
/// `tan(φ/2)` is exactly zero at φ = 0, where the quotient is undefined.
/// There the right-hand limit π/2 is used, which is the value the ramp
/// starts from for every φ just above zero.
fn arc_cot_half(radians: f32) -> f32 {
    let tangent = libm::tanf(radians / 2.0);
    if tangent == 0.0 {
        return FRAC_PI_2;
    }
    libm::atanf(1.0 / tangent)
}

// ── Unit Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 0.05;

    fn config(amplitude_mv: u32, dc_offset_mv: u32) -> GeneratorConfig {
        GeneratorConfig {
            amplitude_mv,
            dc_offset_mv,
            frequency_hz: 360,
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {} got {}",
            expected,
            actual
        );
    }

    // ── Cycle order ──────────────────────────────────────────────────

    #[test]
    fn next_follows_declaration_order() {
        assert_eq!(WaveformKind::Sine.next(), WaveformKind::Triangle);
        assert_eq!(WaveformKind::Triangle.next(), WaveformKind::Sawtooth);
        assert_eq!(WaveformKind::Sawtooth.next(), WaveformKind::Square);
        assert_eq!(WaveformKind::Square.next(), WaveformKind::Sine);
    }

    #[test]
    fn four_steps_return_to_start() {
        for kind in WaveformKind::ALL {
            assert_eq!(kind.next().next().next().next(), kind);
        }
    }

    #[test]
    fn index_round_trips_through_from_index() {
        for (i, kind) in WaveformKind::ALL.iter().enumerate() {
            assert_eq!(kind.index() as usize, i);
            assert_eq!(WaveformKind::from_index(i as u8), *kind);
        }
        assert_eq!(WaveformKind::from_index(u8::MAX), WaveformKind::Square);
    }

    #[test]
    fn names_and_display() {
        assert_eq!(WaveformKind::Sine.name(), "sine");
        assert_eq!(WaveformKind::Square.to_string(), "square");
        assert_eq!(WaveformKind::default(), WaveformKind::Sine);
    }

    // ── Sine ─────────────────────────────────────────────────────────

    #[test]
    fn sine_peaks_at_90_and_bottoms_at_270() {
        let c = config(1000, 500);
        assert_close(WaveformKind::Sine.duty_mv(90.0, &c), 1500.0);
        assert_close(WaveformKind::Sine.duty_mv(270.0, &c), 500.0);
        assert_close(WaveformKind::Sine.duty_mv(0.0, &c), 1000.0);
    }

    // ── Square ───────────────────────────────────────────────────────

    #[test]
    fn square_is_high_for_first_half_cycle() {
        let c = config(1000, 500);
        assert_eq!(WaveformKind::Square.duty_mv(0.0, &c), 1500.0);
        assert_eq!(WaveformKind::Square.duty_mv(90.0, &c), 1500.0);
        assert_eq!(WaveformKind::Square.duty_mv(179.9, &c), 1500.0);
    }

    #[test]
    fn square_is_offset_from_180() {
        let c = config(1000, 500);
        assert_eq!(WaveformKind::Square.duty_mv(180.0, &c), 500.0);
        assert_eq!(WaveformKind::Square.duty_mv(270.0, &c), 500.0);
        assert_eq!(WaveformKind::Square.duty_mv(359.0, &c), 500.0);
    }

    // ── Triangle ─────────────────────────────────────────────────────

    #[test]
    fn triangle_spans_offset_plus_minus_amplitude() {
        let c = config(1000, 1200);
        assert_close(WaveformKind::Triangle.duty_mv(0.0, &c), 1200.0);
        assert_close(WaveformKind::Triangle.duty_mv(90.0, &c), 2200.0);
        assert_close(WaveformKind::Triangle.duty_mv(180.0, &c), 1200.0);
        assert_close(WaveformKind::Triangle.duty_mv(270.0, &c), 200.0);
    }

    #[test]
    fn triangle_is_linear_between_peaks() {
        let c = config(900, 1000);
        // 45° is halfway up the rising edge.
        assert_close(WaveformKind::Triangle.duty_mv(45.0, &c), 1450.0);
    }

    // ── Sawtooth ─────────────────────────────────────────────────────

    #[test]
    fn sawtooth_at_zero_is_guarded() {
        let c = config(1000, 1250);
        let duty = WaveformKind::Sawtooth.duty_mv(0.0, &c);
        assert!(duty.is_finite());
        assert_close(duty, 250.0);
    }

    #[test]
    fn sawtooth_crosses_offset_at_half_cycle() {
        let c = config(1000, 1250);
        assert_close(WaveformKind::Sawtooth.duty_mv(180.0, &c), 1250.0);
    }

    #[test]
    fn sawtooth_rises_over_the_cycle() {
        let c = config(1000, 1250);
        let mut previous = WaveformKind::Sawtooth.duty_mv(0.0, &c);
        for step in 1..360 {
            let duty = WaveformKind::Sawtooth.duty_mv(step as f32, &c);
            assert!(duty > previous, "not rising at {}°", step);
            previous = duty;
        }
        assert!(previous < 2250.0 + TOLERANCE);
    }

    #[test]
    fn every_shape_is_finite_over_a_cycle() {
        let c = config(2500, 50);
        for kind in WaveformKind::ALL {
            for step in 0..3600 {
                let phase = step as f32 / 10.0;
                assert!(kind.duty_mv(phase, &c).is_finite(), "{} at {}°", kind, phase);
            }
        }
    }
}
