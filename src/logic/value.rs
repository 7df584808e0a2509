//! Percentage arithmetic for track-based widgets.
//!
//! A [`PercentTrack`] keeps its value as a percentage and derives the pixel
//! extent along a track of the current length. The percentage survives any
//! resize, including one to zero length. `increment` is the only clamped
//! mutation; `set_percent` scales linearly with no bound check, so callers
//! passing values outside `[0, 100]` get an extent outside the track.

use tracing::debug;

/// Upper bound of a percentage value.
pub const MAX_PERCENT: f64 = 100.0;

/// Apply `delta` to `current`, saturating at [`MAX_PERCENT`].
///
/// Returns `None` when `delta` is negative, above 100, or NaN.
pub fn increment(current: f64, delta: f64) -> Option<f64> {
    if !(0.0..=MAX_PERCENT).contains(&delta) {
        return None;
    }
    Some((current + delta).min(MAX_PERCENT))
}

/// Pixel positions of `count` evenly spaced ticks across `length`.
///
/// The first tick sits at 0 and the last at `length`. Fewer than two ticks
/// leave no interval to divide; one tick sits at 0 and zero ticks give an
/// empty list.
pub fn tick_positions(count: usize, length: f64) -> Vec<f64> {
    if count < 2 {
        return vec![0.0; count];
    }
    let intervals = (count - 1) as f64;
    (0..count).map(|k| k as f64 * length / intervals).collect()
}

// ---------------------------------------------------------------------------
// PercentTrack
// ---------------------------------------------------------------------------

/// A percentage mapped onto a track of some pixel length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentTrack {
    length: f64,
    percent: f64,
    /// Cached `percent * length / 100`, or the exact pixel value last set.
    extent: f64,
}

impl PercentTrack {
    /// A track of `length` pixels at 0%.
    pub fn new(length: f64) -> Self {
        Self {
            length,
            percent: 0.0,
            extent: 0.0,
        }
    }

    /// Track length in pixels.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Current value as pixels from the track start.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Current value as a percentage of the track length.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Set the value by percentage. Not clamped.
    pub fn set_percent(&mut self, percent: f64) {
        self.percent = percent;
        self.extent = percent * self.length / MAX_PERCENT;
    }

    /// Set the value by pixel extent. Not clamped.
    ///
    /// A zero-length track has no proportion to derive, so the percentage is
    /// left as it was.
    pub fn set_extent(&mut self, extent: f64) {
        self.extent = extent;
        if self.length != 0.0 {
            self.percent = extent * MAX_PERCENT / self.length;
        }
    }

    /// Whether `extent` lies on the track, ends included.
    pub fn contains(&self, extent: f64) -> bool {
        (0.0..=self.length).contains(&extent)
    }

    /// Add `delta` percent, saturating at 100. Returns the new percentage,
    /// or `None` (leaving the value untouched) if `delta` is out of range.
    pub fn increment(&mut self, delta: f64) -> Option<f64> {
        match increment(self.percent(), delta) {
            Some(next) => {
                self.set_percent(next);
                Some(next)
            }
            None => {
                debug!(delta, "increment rejected");
                None
            }
        }
    }

    /// Change the track length, keeping the percentage.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
        self.set_percent(self.percent);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
