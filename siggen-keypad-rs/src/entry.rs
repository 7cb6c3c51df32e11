//! Blocking numeric entry on top of a [`KeySource`].
//!
//! [`NumericEntry::read_number`] collects decimal digits until the
//! [`TERMINATOR`] key is pressed, then accepts the value if it lies in the
//! requested closed range. Out-of-range values clear the buffer and the
//! protocol keeps waiting; there is no cancellation.

use core::fmt;
use core::ops::RangeInclusive;

use embedded_hal_async::delay::DelayNs;
use heapless::String;

use crate::error::EntryError;
use crate::keymap::TERMINATOR;
use crate::matrix::KeySource;

/// Maximum number of digits held while an entry is in progress.
///
/// Leading zeros count towards the limit. One more digit fails the entry
/// with [`EntryError::Parse`].
pub const MAX_DIGITS: usize = 16;

// ── EntryEvent ───────────────────────────────────────────────────────────

/// Progress notifications emitted during [`NumericEntry::read_number`].
///
/// The `Display` impl renders the line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEvent<'a> {
    /// Entry started; `prompt` describes the value being requested.
    Prompt {
        prompt: &'a str,
        min: u32,
        max: u32,
    },
    /// A digit was accepted; carries the whole buffer so far.
    Echo(&'a str),
    /// The terminated value was outside the range and has been discarded.
    OutOfRange { value: u32, min: u32, max: u32 },
    /// The terminated value was accepted.
    Accepted(u32),
}

impl fmt::Display for EntryEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryEvent::Prompt { prompt, min, max } => {
                write!(f, "{} ({}-{}), finish with {}:", prompt, min, max, TERMINATOR)
            }
            EntryEvent::Echo(digits) => f.write_str(digits),
            EntryEvent::OutOfRange { value, min, max } => write!(
                f,
                "Value {} out of range ({}-{}). Try again.",
                value, min, max
            ),
            EntryEvent::Accepted(value) => write!(f, "Accepted {}", value),
        }
    }
}

// ── NumericEntry ─────────────────────────────────────────────────────────

/// Line-buffered digit collector.
///
/// Polls its key source, sleeping `poll_interval_ms` between polls. A key
/// that stays down across polls is read again on each poll, exactly as if
/// it had been pressed repeatedly.
///
/// # Example
///
/// ```ignore
/// use keypad_driver::NumericEntry;
///
/// let mut entry = NumericEntry::new(keypad, embassy_time::Delay, 100);
/// let amplitude = entry
///     .read_number("Enter amplitude in mV", 100..=2500, |event| defmt::info!("{}", defmt::Display2Format(&event)))
///     .await?;
/// ```
pub struct NumericEntry<K, D> {
    keys: K,
    delay: D,
    poll_interval_ms: u32,
}

impl<K, D> NumericEntry<K, D>
where
    K: KeySource,
    D: DelayNs,
{
    /// Wrap a key source.
    pub fn new(keys: K, delay: D, poll_interval_ms: u32) -> Self {
        Self {
            keys,
            delay,
            poll_interval_ms,
        }
    }

    /// Wait until the user enters a number inside `range`.
    ///
    /// - Digit keys are appended to the buffer and echoed.
    /// - [`TERMINATOR`] with a non-empty buffer parses it as decimal
    ///   (leading zeros allowed). Out of range: report, clear, keep waiting.
    ///   In range: return it.
    /// - [`TERMINATOR`] on an empty buffer, and every other key, is ignored.
    ///
    /// # Errors
    /// * [`EntryError::Key`] when the key source fails.
    /// * [`EntryError::Parse`] when the buffer grows past [`MAX_DIGITS`] or
    ///   the terminated digits overflow a `u32`.
    pub async fn read_number<F>(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
        mut on_event: F,
    ) -> Result<u32, EntryError<K::Error>>
    where
        F: FnMut(EntryEvent<'_>),
    {
        let (min, max) = (*range.start(), *range.end());
        on_event(EntryEvent::Prompt { prompt, min, max });

        let mut digits: String<MAX_DIGITS> = String::new();

        loop {
            match self.keys.next_key().await? {
                Some(key) if key.is_ascii_digit() => {
                    if digits.push(key).is_err() {
                        return Err(EntryError::Parse);
                    }
                    on_event(EntryEvent::Echo(digits.as_str()));
                }
                Some(TERMINATOR) if !digits.is_empty() => {
                    let Ok(value) = digits.parse::<u32>() else {
                        return Err(EntryError::Parse);
                    };
                    if range.contains(&value) {
                        on_event(EntryEvent::Accepted(value));
                        return Ok(value);
                    }

                    #[cfg(feature = "defmt")]
                    defmt::debug!("entry {} rejected, range {}-{}", value, min, max);
                    on_event(EntryEvent::OutOfRange { value, min, max });
                    digits.clear();
                }
                _ => {}
            }

            self.delay.delay_ms(self.poll_interval_ms).await;
        }
    }

    /// Give the key source and delay back to the caller.
    pub fn release(self) -> (K, D) {
        (self.keys, self.delay)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::string::String as StdString;

    use embassy_futures::block_on;

    /// Returned once the scripted keys run out, so a test never spins forever.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Exhausted;

    /// Plays back one poll result per call.
    struct ScriptedKeys {
        polls: VecDeque<Option<char>>,
    }

    impl ScriptedKeys {
        /// Each character is a key; `.` is a poll with nothing pressed.
        fn typed(script: &str) -> Self {
            let polls = script
                .chars()
                .map(|c| if c == '.' { None } else { Some(c) })
                .collect();
            Self { polls }
        }
    }

    impl KeySource for ScriptedKeys {
        type Error = Exhausted;

        async fn next_key(&mut self) -> Result<Option<char>, Exhausted> {
            self.polls.pop_front().ok_or(Exhausted)
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        delays_ms: Vec<u32>,
    }

    impl DelayNs for CountingDelay {
        async fn delay_ns(&mut self, _ns: u32) {}

        async fn delay_ms(&mut self, ms: u32) {
            self.delays_ms.push(ms);
        }
    }

    fn read(
        script: &str,
        range: RangeInclusive<u32>,
    ) -> (Result<u32, EntryError<Exhausted>>, Vec<StdString>, Vec<u32>) {
        let mut entry = NumericEntry::new(ScriptedKeys::typed(script), CountingDelay::default(), 100);
        let mut lines = Vec::new();
        let result = block_on(entry.read_number("Enter amplitude in mV", range, |event| {
            lines.push(event.to_string())
        }));
        let (_, delay) = entry.release();
        (result, lines, delay.delays_ms)
    }

    // ── Accepting values ─────────────────────────────────────────────

    #[test]
    fn in_range_value_is_returned() {
        let (result, lines, _) = read("150D", 100..=2500);
        assert_eq!(result, Ok(150));
        assert_eq!(
            lines,
            [
                "Enter amplitude in mV (100-2500), finish with D:",
                "1",
                "15",
                "150",
                "Accepted 150",
            ]
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(read("100D", 100..=2500).0, Ok(100));
        assert_eq!(read("2500D", 100..=2500).0, Ok(2500));
    }

    #[test]
    fn leading_zeros_parse_as_decimal() {
        assert_eq!(read("007D", 1..=10).0, Ok(7));
    }

    #[test]
    fn largest_frequency_is_accepted() {
        assert_eq!(read("12000000D", 1..=12_000_000).0, Ok(12_000_000));
    }

    // ── Rejecting values ─────────────────────────────────────────────

    #[test]
    fn out_of_range_clears_buffer_and_keeps_waiting() {
        let (result, lines, _) = read("50D", 100..=2500);
        assert_eq!(result, Err(EntryError::Key(Exhausted)));
        assert_eq!(lines.last().unwrap(), "Value 50 out of range (100-2500). Try again.");
    }

    #[test]
    fn rejected_digits_do_not_leak_into_next_attempt() {
        let (result, lines, _) = read("50D150D", 100..=2500);
        assert_eq!(result, Ok(150));
        // After the rejection the echo restarts from the first new digit.
        assert!(lines.iter().any(|l| l == "Value 50 out of range (100-2500). Try again."));
        assert_eq!(lines[lines.len() - 4], "1");
    }

    #[test]
    fn terminator_on_empty_buffer_is_ignored() {
        let (result, lines, _) = read("D.D150D", 100..=2500);
        assert_eq!(result, Ok(150));
        assert!(!lines.iter().any(|l| l.contains("out of range")));
    }

    #[test]
    fn non_digit_keys_are_ignored() {
        let (result, _, _) = read("1A*2#B5C0D", 100..=2500);
        assert_eq!(result, Ok(1250));
    }

    #[test]
    fn overflowing_u32_fails_with_parse_error() {
        let (result, _, _) = read("99999999999D", 1..=12_000_000);
        assert_eq!(result, Err(EntryError::Parse));
    }

    #[test]
    fn too_many_digits_fails_with_parse_error() {
        let script: StdString = core::iter::repeat('0').take(MAX_DIGITS + 1).collect();
        let (result, lines, _) = read(&script, 1..=10);
        assert_eq!(result, Err(EntryError::Parse));
        // Every digit up to the limit was echoed before the failure.
        assert_eq!(lines.len(), 1 + MAX_DIGITS);
    }

    // ── Polling ──────────────────────────────────────────────────────

    #[test]
    fn sleeps_poll_interval_between_polls() {
        let (result, _, delays) = read("..7D", 1..=10);
        assert_eq!(result, Ok(7));
        // Four polls, the last one returns without sleeping.
        assert_eq!(delays, [100, 100, 100]);
    }

    #[test]
    fn key_source_error_propagates() {
        let (result, lines, _) = read("", 1..=10);
        assert_eq!(result, Err(EntryError::Key(Exhausted)));
        assert_eq!(lines.len(), 1);
    }
}
