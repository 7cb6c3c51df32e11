//! Waveform mode selection shared between the button handler and the main
//! loop.
//!
//! The mode is the only state that crosses from the button context into the
//! generation loop. It is a single byte, written with one atomic store by
//! the button handler and read with one atomic load at the top of each
//! cycle, so no lock is needed. Amplitude, offset and frequency never cross
//! this boundary.
//!
//! The human-readable "waveform changed" notice is not printed by the
//! handler. [`ModeIndex::advance`] posts the new shape to a [`Signal`] and
//! the main loop prints it between cycles.

use core::sync::atomic::{AtomicU8, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::waveform::WaveformKind;

/// Source of the active waveform shape.
pub trait ModeSource {
    /// Shape to use for the next cycle.
    fn current(&self) -> WaveformKind;

    /// Step to the next shape in cycle order and return it.
    ///
    /// Must be O(1) and non-blocking: it runs from the button handler.
    fn advance(&self) -> WaveformKind;

    /// The most recent shape selected by [`advance`](Self::advance) since the
    /// last call, if any.
    fn take_change(&self) -> Option<WaveformKind>;
}

/// Atomic mode index with a deferred change notice.
///
/// Intended to live in a `static` shared by the button task and the main
/// loop:
///
/// ```ignore
/// static MODE: ModeIndex = ModeIndex::new();
/// ```
pub struct ModeIndex {
    index: AtomicU8,
    changed: Signal<CriticalSectionRawMutex, WaveformKind>,
}

impl ModeIndex {
    /// Start at [`WaveformKind::Sine`].
    pub const fn new() -> Self {
        Self::starting_at(WaveformKind::Sine)
    }

    /// Start at `kind`.
    pub const fn starting_at(kind: WaveformKind) -> Self {
        Self {
            index: AtomicU8::new(kind.index()),
            changed: Signal::new(),
        }
    }
}

impl Default for ModeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeSource for ModeIndex {
    fn current(&self) -> WaveformKind {
        WaveformKind::from_index(self.index.load(Ordering::Acquire))
    }

    fn advance(&self) -> WaveformKind {
        // Single writer (the button handler), so load + store is enough.
        let next = self.current().next();
        self.index.store(next.index(), Ordering::Release);
        self.changed.signal(next);

        #[cfg(feature = "defmt")]
        defmt::debug!("mode advanced to {}", next);

        next
    }

    fn take_change(&self) -> Option<WaveformKind> {
        self.changed.try_take()
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
