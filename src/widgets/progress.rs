//! ProgressBar widget: a horizontal track with a fill proportional to the
//! value.
//!
//! `increment` is the clamped way to advance the bar and the only one that
//! notifies. `set_value` scales linearly with no bound check: values outside
//! `0..=100` draw a fill shorter than zero or longer than the track.

use crate::event::{Callback, InputEvent};
use crate::geometry::Offset;
use crate::logic::PercentTrack;
use crate::shape::{Renderer, ShapeGroup, Slot};
use crate::theme::Theme;
use crate::widget::{StateMachine, Widget, WidgetState};

/// Payload of the progress notification: an increment happened, and this is
/// the value it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incremented {
    pub value: f64,
}

/// A horizontal progress bar.
#[derive(Debug)]
pub struct ProgressBar {
    machine: StateMachine,
    value: PercentTrack,
    on_incremented: Callback<Incremented>,
    shapes: ShapeGroup,
    track: Slot,
    fill: Slot,
}

impl ProgressBar {
    /// Height of the bar.
    pub const HEIGHT: f64 = 20.0;

    /// Build an empty bar `width` pixels wide.
    pub fn new(renderer: &mut dyn Renderer, theme: &Theme, width: f64) -> Self {
        let mut shapes = ShapeGroup::new();
        let track = shapes.add(renderer.rect(width, Self::HEIGHT), Offset::ZERO);
        shapes.set_fill(track, theme.track);
        let fill = shapes.add(renderer.rect(0.0, Self::HEIGHT), Offset::ZERO);
        shapes.set_fill(fill, theme.accent);

        Self {
            machine: StateMachine::new("ProgressBar"),
            value: PercentTrack::new(width),
            on_incremented: Callback::new(),
            shapes,
            track,
            fill,
        }
    }

    pub fn width(&self) -> f64 {
        self.value.length()
    }

    /// Current value in percent.
    pub fn value(&self) -> f64 {
        self.value.percent()
    }

    /// Set the value in percent. Not clamped, and does not notify.
    pub fn set_value(&mut self, percent: f64) {
        self.value.set_percent(percent);
        self.paint();
    }

    /// Advance by `delta` percent, saturating at 100.
    ///
    /// A `delta` below 0 or above 100 is ignored and `false` returned.
    /// Otherwise the increment handler runs with the new value, then the bar
    /// enters [`WidgetState::Updating`].
    pub fn increment(&mut self, delta: f64) -> bool {
        let Some(value) = self.value.increment(delta) else {
            return false;
        };
        self.paint();
        self.on_incremented.emit(Incremented { value });
        self.machine.transition(WidgetState::Updating);
        true
    }

    /// Register the increment handler.
    pub fn on_progress_incremented(&mut self, handler: impl FnMut(Incremented) + 'static) {
        self.on_incremented.set(handler);
    }

    /// Change the width, keeping the percentage.
    pub fn set_width(&mut self, width: f64) {
        self.value.set_length(width);
        self.shapes.resize(self.track, width, Self::HEIGHT);
        self.paint();
    }

    fn paint(&mut self) {
        self.shapes.resize(self.fill, self.value.extent(), Self::HEIGHT);
    }
}

impl Widget for ProgressBar {
    type Part = ();

    fn widget_type(&self) -> &'static str {
        "ProgressBar"
    }

    fn state(&self) -> WidgetState {
        self.machine.current()
    }

    fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.machine.on_change(handler);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.shapes.move_to(x, y);
    }

    fn position(&self) -> Offset {
        self.shapes.origin()
    }

    fn handle_event(&mut self, _part: (), event: &InputEvent) {
        match event {
            InputEvent::PointerEnter(_) => self.machine.transition(WidgetState::Hover),
            InputEvent::PointerLeave(_) => self.machine.transition(WidgetState::Idle),
            _ => {}
        }
    }
}
