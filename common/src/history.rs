//! Rolling sample history feeding the time-series plots.
//!
//! A [`RollingHistory`] keeps the most recent `N` samples of one metric in
//! arrival order. Once full, every append drops the oldest sample and shifts
//! the rest down one slot, so [`RollingHistory::as_slice`] is always a
//! contiguous oldest-to-newest view that the plot scaler can walk directly.
//!
//! The shift makes `append` O(N). With `N` equal to one grid column (88
//! samples) and one append per e-paper refresh that cost is negligible.

use heapless::Vec;

use crate::config::{HISTORY_SENTINEL_MAX, HISTORY_SENTINEL_MIN};

/// A single stored value. Temperature and humidity are truncated to whole
/// units before they are stored.
pub type Sample = i32;

/// Convert a physical reading to a history sample (truncates toward zero).
#[inline]
pub fn to_sample(value: f32) -> Sample { value as Sample }

/// Fixed-capacity FIFO of samples for one tracked metric.
#[derive(Clone, Debug)]
pub struct RollingHistory<const N: usize> {
    samples: Vec<Sample, N>,
}

impl<const N: usize> RollingHistory<N> {
    /// Create an empty history.
    pub const fn new() -> Self {
        const { assert!(N > 0, "history capacity must be non-zero") };
        Self { samples: Vec::new() }
    }

    /// Append the newest sample, evicting the oldest one when full.
    pub fn append(
        &mut self,
        value: Sample,
    ) {
        if self.samples.is_full() {
            self.samples.remove(0);
        }
        // Cannot fail: there is at least one free slot at this point.
        self.samples.push(value).ok();
    }

    /// Number of stored samples.
    #[inline]
    pub fn len(&self) -> usize { self.samples.len() }

    /// Check if no sample has been stored yet.
    #[inline]
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Maximum number of samples kept.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Stored samples, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[Sample] { &self.samples }

    /// Most recently appended sample.
    #[inline]
    pub fn latest(&self) -> Option<Sample> { self.samples.last().copied() }

    /// Smallest and largest stored sample.
    ///
    /// An empty history reports the widest 16-bit range
    /// (`HISTORY_SENTINEL_MIN`, `HISTORY_SENTINEL_MAX`). Callers must treat
    /// that pair as "no data" rather than as real bounds.
    pub fn boundaries(&self) -> (Sample, Sample) {
        let mut iter = self.samples.iter().copied();
        let Some(first) = iter.next() else {
            return (HISTORY_SENTINEL_MIN, HISTORY_SENTINEL_MAX);
        };

        iter.fold((first, first), |(min, max), value| (min.min(value), max.max(value)))
    }

    /// Drop every stored sample.
    pub fn clear(&mut self) { self.samples.clear(); }
}

impl<const N: usize> Default for RollingHistory<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
