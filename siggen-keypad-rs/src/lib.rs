//! Async driver for a 4×4 matrix keypad and a blocking numeric-entry
//! protocol built on it.
//!
//! # Architecture
//!
//! - **[`KeyMatrix`]** — column-driven scanner over embedded-hal 1.0 pins.
//!   Returns at most one debounced key per [`scan`](KeyMatrix::scan).
//! - **[`KeySource`]** — the seam between scanning and entry; anything that
//!   yields one key per poll.
//! - **[`NumericEntry`]** — collects digits until the terminator key and
//!   enforces a closed range.
//!
//! # Quick start
//!
//! ```ignore
//! use keypad_driver::{KeyMatrix, KeypadConfig, NumericEntry};
//!
//! let config = KeypadConfig::default();
//! let keypad = KeyMatrix::new(rows, cols, embassy_time::Delay, config)?;
//! let mut entry = NumericEntry::new(keypad, embassy_time::Delay, config.poll_interval_ms);
//!
//! let hz = entry.read_number("Enter frequency in Hz", 1..=12_000_000, |_| {}).await?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error and
//!   configuration types, and debug logging of detected keys.

#![cfg_attr(not(test), no_std)]

pub use entry::{EntryEvent, NumericEntry, MAX_DIGITS};
pub use error::{EntryError, KeypadError};
pub use keymap::{key_at, COLS, KEY_MAP, ROWS, TERMINATOR};
pub use matrix::{KeyMatrix, KeySource, KeypadConfig};

mod entry;
mod error;
mod keymap;
mod matrix;
