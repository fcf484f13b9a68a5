//! Chorus windows: closed playback intervals during which the effect runs.
//!
//! Windows are fixed once built. Lookups are a linear scan; a track has a
//! handful of choruses at most, so the list is kept inline.

use smallvec::SmallVec;
use thiserror::Error;

use crate::constants::{CHORUS_DURATION_SEC, CHORUS_STARTS_SEC};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WindowError {
    #[error("window bound must be finite (got {0})")]
    NonFinite(f64),

    #[error("window start {start} is after its end {end}")]
    Inverted { start: f64, end: f64 },

    #[error("window duration must be finite and non-negative (got {0})")]
    InvalidDuration(f64),
}

/// Closed interval `[start, end]` in seconds of playback time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    start: f64,
    end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Result<Self, WindowError> {
        if !start.is_finite() {
            return Err(WindowError::NonFinite(start));
        }
        if !end.is_finite() {
            return Err(WindowError::NonFinite(end));
        }
        if start > end {
            return Err(WindowError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Inclusive on both ends.
    #[inline]
    pub fn contains(&self, time_sec: f64) -> bool {
        time_sec >= self.start && time_sec <= self.end
    }
}

/// True iff `time_sec` falls inside any of `windows`.
///
/// Non-finite times are never inside a window. An empty slice is never
/// active.
pub fn is_active(time_sec: f64, windows: &[TimeWindow]) -> bool {
    time_sec.is_finite() && windows.iter().any(|w| w.contains(time_sec))
}

/// Ordered, immutable set of chorus windows.
#[derive(Clone, Debug, PartialEq)]
pub struct ChorusWindows {
    windows: SmallVec<[TimeWindow; 4]>,
}

impl ChorusWindows {
    pub fn empty() -> Self {
        Self {
            windows: SmallVec::new(),
        }
    }

    pub fn new(windows: impl IntoIterator<Item = TimeWindow>) -> Self {
        Self {
            windows: windows.into_iter().collect(),
        }
    }

    /// Build `[start, start + duration]` for every start, keeping order.
    pub fn from_starts(starts: &[f64], duration_sec: f64) -> Result<Self, WindowError> {
        if !(duration_sec.is_finite() && duration_sec >= 0.0) {
            return Err(WindowError::InvalidDuration(duration_sec));
        }
        let windows = starts
            .iter()
            .map(|&start| TimeWindow::new(start, start + duration_sec))
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Self { windows })
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, WindowError> {
        let windows = pairs
            .iter()
            .map(|&(start, end)| TimeWindow::new(start, end))
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Self { windows })
    }

    /// Chorus layout of the bundled track.
    pub fn default_chorus() -> Self {
        let windows = CHORUS_STARTS_SEC.iter().map(|&start| TimeWindow {
            start,
            end: start + CHORUS_DURATION_SEC,
        });
        Self::new(windows)
    }

    #[inline]
    pub fn is_active(&self, time_sec: f64) -> bool {
        is_active(time_sec, &self.windows)
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn as_slice(&self) -> &[TimeWindow] {
        &self.windows
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeWindow> {
        self.windows.iter()
    }
}
