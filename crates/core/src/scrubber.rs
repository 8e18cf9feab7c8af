//! Scrubber drag state and time synchronization.
//!
//! The scrubber is the draggable marker indicating the currently focused
//! point in time. Its state machine has two states, `Idle` and `Dragging`,
//! driven by pointer, resize, and selection events delivered by the view.
//! Time is the ground truth: the pixel position is always re-derivable from
//! the held timestamp, which is what makes track resizes lossless.
//!
//! While dragging, pointer-move and pointer-up must be observed across the
//! whole viewport, not just the track element, or the drag gets stuck when
//! the pointer leaves the track. [`Scrubber::wants_global_pointer_events`]
//! tells the view when to widen (and when to drop) that listener scope.

use crate::timeline::{pixel_to_time, time_to_pixel, TimeWindow};
use crate::types::Timestamp;

/// Whether a pointer drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// An input event delivered to the scrubber by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubberEvent {
    /// Pointer pressed inside the track, at pixel offset `x`.
    PointerDown { x: f64 },
    /// Pointer moved, at pixel offset `x` relative to the track.
    PointerMove { x: f64 },
    /// Pointer released, anywhere in the viewport.
    PointerUp,
    /// An incident was selected externally; jump to its start time.
    IncidentSelected { ts_start: Timestamp },
    /// The track was laid out again with a new width.
    TrackResized { width_px: f64 },
}

/// Transient scrubber state. Owned by the view that renders the timeline;
/// never persisted.
#[derive(Debug, Clone)]
pub struct Scrubber {
    time: Timestamp,
    position_px: f64,
    width_px: f64,
    drag: DragState,
}

impl Scrubber {
    /// Create a scrubber parked at the window start.
    pub fn new(window: &TimeWindow, width_px: f64) -> Self {
        Self {
            time: window.start,
            position_px: 0.0,
            width_px,
            drag: DragState::Idle,
        }
    }

    /// The currently focused point in time.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// Current marker position in pixels from the track's left edge.
    pub fn position_px(&self) -> f64 {
        self.position_px
    }

    /// Current drag state.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// True while a drag is in progress; the view must then route
    /// pointer-move/up events from the whole viewport to [`Self::apply`],
    /// and detach those listeners once this returns false again.
    pub fn wants_global_pointer_events(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Feed one event through the state machine.
    ///
    /// Returns the new scrubber offset in whole seconds since
    /// `window.start` whenever the focused time changed, mirroring the
    /// "time changed" callback contract.
    pub fn apply(&mut self, window: &TimeWindow, event: ScrubberEvent) -> Option<i64> {
        match event {
            ScrubberEvent::PointerDown { x } => {
                self.drag = DragState::Dragging;
                Some(self.seek_to_pixel(window, x))
            }
            ScrubberEvent::PointerMove { x } => match self.drag {
                DragState::Dragging => Some(self.seek_to_pixel(window, x)),
                DragState::Idle => None,
            },
            ScrubberEvent::PointerUp => {
                self.drag = DragState::Idle;
                None
            }
            ScrubberEvent::IncidentSelected { ts_start } => {
                Some(self.seek_to_time(window, ts_start))
            }
            ScrubberEvent::TrackResized { width_px } => {
                self.width_px = width_px;
                self.position_px = time_to_pixel(self.time, window, width_px);
                None
            }
        }
    }

    fn seek_to_pixel(&mut self, window: &TimeWindow, x: f64) -> i64 {
        self.position_px = x.clamp(0.0, self.width_px.max(0.0));
        self.time = pixel_to_time(self.position_px, window, self.width_px);
        self.offset_seconds(window)
    }

    fn seek_to_time(&mut self, window: &TimeWindow, t: Timestamp) -> i64 {
        self.time = t.clamp(window.start, window.end);
        self.position_px = time_to_pixel(self.time, window, self.width_px);
        self.offset_seconds(window)
    }

    fn offset_seconds(&self, window: &TimeWindow) -> i64 {
        (self.time - window.start).num_seconds()
    }
}
