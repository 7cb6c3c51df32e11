//! Polled scanner for the 4×4 key matrix.
//!
//! [`KeyMatrix`] owns the row and column lines and returns at most one
//! debounced key per call to [`KeyMatrix::scan`]. Columns are the outer loop
//! and rows the inner loop, so simultaneous presses resolve to the first
//! position met in that order.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::error::KeypadError;
use crate::keymap::{COLS, KEY_MAP, ROWS};

// ── KeypadConfig ─────────────────────────────────────────────────────────

/// Timing configuration for keypad scanning and numeric entry.
///
/// [`KeypadConfig::default()`] reproduces the device timing: a 20 ms
/// debounce re-read and a 100 ms pause between polls during entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Delay between first seeing a row active and re-reading it. Default: 20.
    pub debounce_ms: u32,
    /// Pause between consecutive scans while waiting for entry. Default: 100.
    pub poll_interval_ms: u32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            poll_interval_ms: 100,
        }
    }
}

// ── KeySource ────────────────────────────────────────────────────────────

/// Anything that can be polled for a single key press.
///
/// [`KeyMatrix`] is the hardware implementation. [`NumericEntry`] only needs
/// this trait, which keeps the entry protocol independent of pin types.
///
/// [`NumericEntry`]: crate::NumericEntry
#[allow(async_fn_in_trait)]
pub trait KeySource {
    /// Error produced while reading a key.
    type Error;

    /// Poll once. Returns `Ok(None)` when no key is pressed.
    async fn next_key(&mut self) -> Result<Option<char>, Self::Error>;
}

// ── KeyMatrix ────────────────────────────────────────────────────────────

/// Column-driven scanner for a 4×4 key matrix.
///
/// Rows are inputs with pull-ups. Columns are outputs that idle high; a
/// column is pulled low only while its rows are being read.
///
/// # Example
///
/// ```ignore
/// use keypad_driver::{KeyMatrix, KeypadConfig};
///
/// let mut keypad = KeyMatrix::new(rows, cols, embassy_time::Delay, KeypadConfig::default())?;
/// if let Some(key) = keypad.scan().await? {
///     defmt::info!("pressed {}", key);
/// }
/// ```
pub struct KeyMatrix<R, C, D> {
    rows: [R; ROWS],
    columns: [C; COLS],
    delay: D,
    config: KeypadConfig,
}

impl<R, C, D, E> KeyMatrix<R, C, D>
where
    R: InputPin<Error = E>,
    C: OutputPin<Error = E>,
    D: DelayNs,
{
    /// Take ownership of the matrix lines and drive every column to idle.
    ///
    /// # Errors
    /// * [`KeypadError::Pin`] if a column cannot be driven high.
    pub fn new(
        rows: [R; ROWS],
        mut columns: [C; COLS],
        delay: D,
        config: KeypadConfig,
    ) -> Result<Self, KeypadError<E>> {
        for column in columns.iter_mut() {
            column.set_high()?;
        }

        Ok(Self {
            rows,
            columns,
            delay,
            config,
        })
    }

    /// Scan the whole matrix once.
    ///
    /// Each column is driven low in turn while every row is read. A row that
    /// reads low is re-read after [`KeypadConfig::debounce_ms`]; if it is
    /// still low the mapped key is returned. A row that has gone high again
    /// is treated as bounce and scanning continues.
    ///
    /// Every column is back at idle when this returns, including on error.
    ///
    /// # Errors
    /// * [`KeypadError::Pin`] on a row read or column write failure.
    pub async fn scan(&mut self) -> Result<Option<char>, KeypadError<E>> {
        for column in 0..COLS {
            self.columns[column].set_low()?;
            let hit = self.probe_rows(column).await;
            self.columns[column].set_high()?;

            if let Some(key) = hit? {
                #[cfg(feature = "defmt")]
                defmt::debug!("key '{}' at column {}", key, column);
                return Ok(Some(key));
            }
        }

        Ok(None)
    }

    /// Current timing configuration.
    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Give the matrix lines and delay back to the caller.
    pub fn release(self) -> ([R; ROWS], [C; COLS], D) {
        (self.rows, self.columns, self.delay)
    }

    /// Read every row while `column` is driven low.
    async fn probe_rows(&mut self, column: usize) -> Result<Option<char>, KeypadError<E>> {
        for row in 0..ROWS {
            if self.rows[row].is_low()? {
                self.delay.delay_ms(self.config.debounce_ms).await;
                if self.rows[row].is_low()? {
                    return Ok(Some(KEY_MAP[row][column]));
                }
            }
        }

        Ok(None)
    }
}

impl<R, C, D, E> KeySource for KeyMatrix<R, C, D>
where
    R: InputPin<Error = E>,
    C: OutputPin<Error = E>,
    D: DelayNs,
{
    type Error = KeypadError<E>;

    async fn next_key(&mut self) -> Result<Option<char>, Self::Error> {
        self.scan().await
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
