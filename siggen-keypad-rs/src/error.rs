//! Error types for the keypad driver.

use core::fmt;

/// Errors that can occur while driving the key matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadError<E> {
    /// A row or column pin operation failed.
    Pin(E),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for KeypadError<E> {
    fn from(error: E) -> Self {
        KeypadError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for KeypadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeypadError::Pin(e) => write!(f, "Key matrix pin error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for KeypadError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            KeypadError::Pin(e) => defmt::write!(f, "Key matrix pin error: {}", e),
        }
    }
}

/// Errors returned by [`NumericEntry::read_number`](crate::NumericEntry::read_number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError<E> {
    /// The key source failed.
    Key(E),

    /// The accumulated digits do not fit in a `u32`, or exceed the digit
    /// buffer. The partial entry is discarded.
    Parse,
}

impl<E> From<E> for EntryError<E> {
    fn from(error: E) -> Self {
        EntryError::Key(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EntryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryError::Key(e) => write!(f, "Key source error: {:?}", e),
            EntryError::Parse => write!(f, "Entry does not fit the numeric range"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EntryError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EntryError::Key(e) => defmt::write!(f, "Key source error: {}", e),
            EntryError::Parse => defmt::write!(f, "Entry does not fit the numeric range"),
        }
    }
}
