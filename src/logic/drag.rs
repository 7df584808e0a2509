//! Scrollbar thumb: step buttons, dragging, and clamping.
//!
//! Coordinates are track-local: 0 is the top edge of the track. The thumb is
//! one sixth of the track tall. Its top edge may not rise above the top clamp
//! (the bottom of the step-up button) and its bottom edge may not pass the
//! bottom clamp (the track height). Mutations that would cross a clamp are
//! rejected whole; nothing is partially applied or snapped to the edge.
//!
//! A drag starts with a pointer-down on the thumb. Each accepted move pulses
//! [`WidgetState::Updating`] and records the direction of travel. Leaving the
//! track mid-drag commits the drag, reporting the last recorded direction
//! once; releasing the button over the track cancels it silently.

use std::fmt;

use tracing::debug;

use super::value::PercentTrack;
use crate::error::WidgetError;
use crate::event::Callback;
use crate::widget::{StateMachine, WidgetState};

/// The thumb is the track height divided by this.
pub const THUMB_DIVISOR: f64 = 6.0;

/// Direction of thumb travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    /// Distance from the thumb's top edge to the pointer at pointer-down.
    grab: f64,
    last_direction: Option<Direction>,
}

/// Thumb position, drag state and scroll subscription.
#[derive(Debug)]
pub struct DragThumb {
    machine: StateMachine,
    track_height: f64,
    thumb_height: f64,
    top_clamp: f64,
    step: f64,
    /// Thumb travel below the top clamp.
    travel: PercentTrack,
    drag: Option<Drag>,
    on_scroll_moved: Callback<Direction>,
}

impl DragThumb {
    /// A thumb resting against the top clamp.
    ///
    /// Fails if the thumb does not fit between `top_clamp` and `track_height`.
    pub fn new(track_height: f64, top_clamp: f64, step: f64) -> Result<Self, WidgetError> {
        let thumb_height = track_height / THUMB_DIVISOR;
        let travel = track_height - thumb_height - top_clamp;
        if travel.is_nan() || travel < 0.0 || top_clamp < 0.0 {
            return Err(WidgetError::TrackTooShort {
                height: track_height,
                required: top_clamp + thumb_height,
            });
        }
        Ok(Self {
            machine: StateMachine::new("ScrollBar"),
            track_height,
            thumb_height,
            top_clamp,
            step,
            travel: PercentTrack::new(travel),
            drag: None,
            on_scroll_moved: Callback::new(),
        })
    }

    pub fn state(&self) -> WidgetState {
        self.machine.current()
    }

    pub fn track_height(&self) -> f64 {
        self.track_height
    }

    pub fn thumb_height(&self) -> f64 {
        self.thumb_height
    }

    pub fn top_clamp(&self) -> f64 {
        self.top_clamp
    }

    /// Bottom clamp: the lowest the thumb's bottom edge may go.
    pub fn bottom_clamp(&self) -> f64 {
        self.track_height
    }

    /// Track-local y of the thumb's top edge.
    pub fn offset(&self) -> f64 {
        self.top_clamp + self.travel.extent()
    }

    /// Thumb position as a percentage of its travel.
    pub fn percent(&self) -> f64 {
        self.travel.percent()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.machine.on_change(handler);
    }

    /// Register the scroll handler. It receives the direction of travel.
    pub fn on_scroll_moved(&mut self, handler: impl FnMut(Direction) + 'static) {
        self.on_scroll_moved.set(handler);
    }

    /// Whether a thumb with its top edge at `offset` stays within the clamps.
    pub fn fits(&self, offset: f64) -> bool {
        self.travel.contains(offset - self.top_clamp)
    }

    fn try_move(&mut self, offset: f64) -> bool {
        if !self.fits(offset) {
            debug!(
                offset,
                top = self.top_clamp,
                bottom = self.bottom_clamp(),
                "thumb move rejected"
            );
            return false;
        }
        self.travel.set_extent(offset - self.top_clamp);
        true
    }

    /// Move up one step. No-op at the top clamp.
    pub fn step_up(&mut self) -> bool {
        self.step_by(-self.step, Direction::Up)
    }

    /// Move down one step. No-op at the bottom clamp.
    pub fn step_down(&mut self) -> bool {
        self.step_by(self.step, Direction::Down)
    }

    fn step_by(&mut self, delta: f64, direction: Direction) -> bool {
        if delta == 0.0 || delta.is_nan() {
            debug!(step = self.step, "zero step ignored");
            return false;
        }
        let moved = self.try_move(self.offset() + delta);
        if moved {
            self.on_scroll_moved.emit(direction);
        }
        moved
    }

    pub fn pointer_enter(&mut self) {
        self.machine.transition(WidgetState::Hover);
    }

    /// Pointer left the track. Commits an active drag.
    pub fn pointer_leave(&mut self) {
        if let Some(drag) = self.drag.take() {
            match drag.last_direction {
                Some(direction) => {
                    self.on_scroll_moved.emit(direction);
                }
                None => debug!("drag left track without moving"),
            }
        }
        self.machine.transition(WidgetState::Idle);
    }

    /// Pointer pressed on the thumb at track-local `y`. Starts a drag.
    pub fn thumb_down(&mut self, y: f64) {
        self.drag = Some(Drag {
            grab: y - self.offset(),
            last_direction: None,
        });
        self.machine.transition(WidgetState::Pressed);
    }

    /// Pointer moved to track-local `y`. Returns whether the thumb moved.
    ///
    /// Ignored unless a drag is active.
    pub fn drag_to(&mut self, y: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let current = self.offset();
        let candidate = y - drag.grab;
        if !self.try_move(candidate) {
            return false;
        }
        let direction = if candidate > current {
            Some(Direction::Down)
        } else if candidate < current {
            Some(Direction::Up)
        } else {
            None
        };
        if let (Some(direction), Some(active)) = (direction, self.drag.as_mut()) {
            active.last_direction = Some(direction);
        }
        self.machine.transition(WidgetState::Updating);
        true
    }

    /// Pointer released over the track. Cancels an active drag without
    /// reporting.
    pub fn pointer_up(&mut self) {
        self.drag = None;
        self.machine.transition(WidgetState::Hover);
    }

    /// Change the track height, keeping the thumb's percentage.
    ///
    /// Cancels any drag in progress.
    pub fn set_track_height(&mut self, track_height: f64) -> Result<(), WidgetError> {
        let mut resized = DragThumb::new(track_height, self.top_clamp, self.step)?;
        resized.travel.set_percent(self.travel.percent());
        self.track_height = resized.track_height;
        self.thumb_height = resized.thumb_height;
        self.travel = resized.travel;
        self.drag = None;
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
