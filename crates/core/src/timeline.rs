//! Display-window computation and time/pixel coordinate mapping for the
//! incident timeline.
//!
//! The timeline shows every incident on a horizontal track. The visible
//! window is derived from the incident set: the observed min/max range plus
//! a fixed padding on both sides, widened symmetrically to a minimum
//! duration so a handful of clustered incidents never collapses the axis.
//! All mapping between wall-clock time and horizontal pixel offsets is a
//! single linear transform over that window.
//!
//! Everything in this module is pure arithmetic; the only ambient input
//! (the current time, used for the empty-set fallback window) is passed in
//! explicitly.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Padding added on each side of the observed incident range, in hours.
pub const WINDOW_PADDING_HOURS: i64 = 2;

/// Minimum duration of the display window, in hours.
pub const MIN_WINDOW_DURATION_HOURS: i64 = 24;

/// Minimum on-screen width of an incident bar, in pixels. Keeps very short
/// incidents visible and clickable.
pub const MIN_BAR_WIDTH_PX: f64 = 8.0;

/// Lower bound on the tick marker count.
pub const MIN_TICK_COUNT: usize = 8;

/// Upper bound on the tick marker count.
pub const MAX_TICK_COUNT: usize = 24;

/// Target pixel spacing between adjacent tick markers.
const TICK_SPACING_PX: f64 = 100.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The time range currently visualized by the timeline.
///
/// Invariant: `end > start`. Guaranteed by [`compute_window`]; callers
/// constructing a window by hand must uphold it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeWindow {
    /// Total span of the window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// On-screen horizontal extent of an incident bar.
///
/// A `width` of zero means the incident does not intersect the window and
/// must not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarSpan {
    pub left: f64,
    pub width: f64,
}

impl BarSpan {
    const EMPTY: BarSpan = BarSpan {
        left: 0.0,
        width: 0.0,
    };
}

/// A labeled time marker rendered along the timeline axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub time: Timestamp,
    /// 24-hour `HH:MM` label.
    pub label: String,
    pub position_px: f64,
}

// ---------------------------------------------------------------------------
// Window computation
// ---------------------------------------------------------------------------

/// Compute the display window covering the given `(start, end)` intervals.
///
/// With no intervals, falls back to the civil day of `now` in UTC:
/// `[00:00:00, 23:59:59]`. Otherwise the window is the observed min/max
/// range padded by [`WINDOW_PADDING_HOURS`] on both sides; if the result is
/// shorter than [`MIN_WINDOW_DURATION_HOURS`], it is widened symmetrically
/// until the duration equals the minimum exactly.
pub fn compute_window(intervals: &[(Timestamp, Timestamp)], now: Timestamp) -> TimeWindow {
    let Some(&(first_start, first_end)) = intervals.first() else {
        let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        return TimeWindow {
            start,
            end: start + Duration::seconds(86_399),
        };
    };

    let mut min_time = first_start.min(first_end);
    let mut max_time = first_start.max(first_end);
    for &(start, end) in &intervals[1..] {
        min_time = min_time.min(start).min(end);
        max_time = max_time.max(start).max(end);
    }

    let padding = Duration::hours(WINDOW_PADDING_HOURS);
    let mut start = min_time - padding;
    let mut end = max_time + padding;

    let min_duration = Duration::hours(MIN_WINDOW_DURATION_HOURS);
    let deficit = min_duration - (end - start);
    if deficit > Duration::zero() {
        start = start - deficit / 2;
        end = start + min_duration;
    }

    TimeWindow { start, end }
}

// ---------------------------------------------------------------------------
// Coordinate mapping
// ---------------------------------------------------------------------------

/// Map a point in time to a horizontal pixel offset within the track.
///
/// `t` is clamped into the window first, so the result always lies in
/// `[0, width_px]` and is monotonically non-decreasing in `t`. Returns 0
/// when the track has no width yet (not laid out).
pub fn time_to_pixel(t: Timestamp, window: &TimeWindow, width_px: f64) -> f64 {
    if width_px <= 0.0 {
        return 0.0;
    }
    let total_ms = window.duration().num_milliseconds();
    if total_ms <= 0 {
        return 0.0;
    }
    let clamped = t.clamp(window.start, window.end);
    let elapsed_ms = (clamped - window.start).num_milliseconds();
    (elapsed_ms as f64 / total_ms as f64) * width_px
}

/// Map a horizontal pixel offset back to a point in time.
///
/// `x` is clamped into `[0, width_px]` first; for in-range values this is
/// the exact inverse of [`time_to_pixel`] up to millisecond rounding.
/// Returns `window.start` when the track has no width yet.
pub fn pixel_to_time(x: f64, window: &TimeWindow, width_px: f64) -> Timestamp {
    if width_px <= 0.0 {
        return window.start;
    }
    let clamped = x.clamp(0.0, width_px);
    let total_ms = window.duration().num_milliseconds() as f64;
    let offset_ms = (clamped / width_px * total_ms).round() as i64;
    window.start + Duration::milliseconds(offset_ms)
}

/// Compute the on-screen span of an incident bar, clipped to the window.
///
/// Returns an empty span when the incident does not intersect the window or
/// the track has no width. A malformed interval (`ts_end < ts_start`) is
/// treated as zero-duration at `ts_start`; the resulting bar still gets
/// [`MIN_BAR_WIDTH_PX`] so it never renders with negative width.
pub fn incident_span(
    ts_start: Timestamp,
    ts_end: Timestamp,
    window: &TimeWindow,
    width_px: f64,
) -> BarSpan {
    if width_px <= 0.0 {
        return BarSpan::EMPTY;
    }

    let ts_end = ts_end.max(ts_start);
    if ts_end <= window.start || ts_start >= window.end {
        return BarSpan::EMPTY;
    }

    let clipped_start = ts_start.max(window.start);
    let clipped_end = ts_end.min(window.end);
    let left = time_to_pixel(clipped_start, window, width_px);
    let right = time_to_pixel(clipped_end, window, width_px);

    BarSpan {
        left,
        width: (right - left).max(MIN_BAR_WIDTH_PX),
    }
}

// ---------------------------------------------------------------------------
// Tick markers
// ---------------------------------------------------------------------------

/// Pick a tick count that keeps marker spacing near [`TICK_SPACING_PX`],
/// clamped to `[MIN_TICK_COUNT, MAX_TICK_COUNT]`. Returns 0 for an unlaid
/// track.
pub fn tick_count_for_width(width_px: f64) -> usize {
    if width_px <= 0.0 {
        return 0;
    }
    ((width_px / TICK_SPACING_PX) as usize).clamp(MIN_TICK_COUNT, MAX_TICK_COUNT)
}

/// Produce `count + 1` evenly spaced tick markers across `[0, width_px]`,
/// each mapped back to a timestamp and labeled `HH:MM` (24-hour, UTC).
///
/// Returns no markers when the track has no width or `count` is 0.
pub fn generate_ticks(window: &TimeWindow, width_px: f64, count: usize) -> Vec<Tick> {
    if width_px <= 0.0 || count == 0 {
        return Vec::new();
    }

    (0..=count)
        .map(|i| {
            let position_px = (i as f64 / count as f64) * width_px;
            let time = pixel_to_time(position_px, window, width_px);
            Tick {
                time,
                label: time.format("%H:%M").to_string(),
                position_px,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
