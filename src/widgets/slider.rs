//! Slider widget: a horizontal track with evenly spaced ticks and an
//! indicator that snaps to the tick clicked.
//!
//! `n` ticks divide the track into `n - 1` equal intervals; the first tick
//! sits at the left end and the last at the right end. There is no
//! interpolation between ticks.

use tracing::debug;

use crate::error::WidgetError;
use crate::event::{Callback, InputEvent};
use crate::geometry::Offset;
use crate::logic::value::{tick_positions, PercentTrack};
use crate::shape::{Renderer, ShapeGroup, Slot};
use crate::theme::Theme;
use crate::widget::{StateMachine, Widget, WidgetState};

const TRACK_THICKNESS: f64 = 4.0;
const TICK_WIDTH: f64 = 2.0;
const INDICATOR: f64 = 16.0;

/// The shape of a slider an event hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderPart {
    Track,
    Tick(usize),
}

/// A slider with discrete ticks.
#[derive(Debug)]
pub struct Slider {
    machine: StateMachine,
    /// Indicator position along the track.
    value: PercentTrack,
    ticks: Vec<f64>,
    selected: Option<usize>,
    on_tick_changed: Callback<usize>,
    shapes: ShapeGroup,
    track: Slot,
    tick_marks: Vec<Slot>,
    indicator: Slot,
    theme: Theme,
}

impl Slider {
    /// Overall height of the widget: the indicator's diameter.
    pub const HEIGHT: f64 = INDICATOR;

    /// Build a slider `width` pixels wide with `ticks` snap points.
    ///
    /// The indicator starts on the first tick. Fewer than two ticks is an
    /// error.
    pub fn new(
        renderer: &mut dyn Renderer,
        theme: &Theme,
        width: f64,
        ticks: usize,
    ) -> Result<Self, WidgetError> {
        if ticks < 2 {
            return Err(WidgetError::TooFewTicks { count: ticks });
        }
        let positions = tick_positions(ticks, width);
        let middle = (Self::HEIGHT - TRACK_THICKNESS) / 2.0;

        let mut shapes = ShapeGroup::new();
        let track = shapes.add(
            renderer.rect(width, TRACK_THICKNESS),
            Offset::new(0.0, middle),
        );
        shapes.set_fill(track, theme.track);

        let tick_marks = positions
            .iter()
            .map(|&x| {
                shapes.add(
                    renderer.rect(TICK_WIDTH, Self::HEIGHT),
                    Offset::new(x - TICK_WIDTH / 2.0, 0.0),
                )
            })
            .collect();

        let indicator = shapes.add(renderer.circle(INDICATOR), Offset::ZERO);
        shapes.set_fill(indicator, theme.accent);

        let mut slider = Self {
            machine: StateMachine::new("Slider"),
            value: PercentTrack::new(width),
            ticks: positions,
            selected: Some(0),
            on_tick_changed: Callback::new(),
            shapes,
            track,
            tick_marks,
            indicator,
            theme: theme.clone(),
        };
        slider.paint();
        Ok(slider)
    }

    pub fn width(&self) -> f64 {
        self.value.length()
    }

    /// Change the track width. Ticks are spread over the new width and the
    /// indicator keeps its percentage.
    pub fn set_width(&mut self, width: f64) {
        self.value.set_length(width);
        self.ticks = tick_positions(self.ticks.len(), width);
        self.shapes.resize(self.track, width, TRACK_THICKNESS);
        for (&mark, &x) in self.tick_marks.iter().zip(&self.ticks) {
            let y = self.shapes.offset(mark).map_or(0.0, |at| at.y);
            self.shapes.place(mark, Offset::new(x - TICK_WIDTH / 2.0, y));
        }
        self.paint();
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.len()
    }

    /// Track-local x of every tick.
    pub fn tick_positions(&self) -> &[f64] {
        &self.ticks
    }

    /// The tick the indicator rests on, if it rests on one.
    pub fn selected_tick(&self) -> Option<usize> {
        self.selected
    }

    /// Track-local x of the indicator's center.
    pub fn indicator_position(&self) -> f64 {
        self.value.extent()
    }

    /// Indicator position as a percentage of the track width.
    pub fn value(&self) -> f64 {
        self.value.percent()
    }

    /// Move the indicator to `percent` of the track. Not clamped, not snapped,
    /// and does not notify.
    pub fn set_value(&mut self, percent: f64) {
        self.value.set_percent(percent);
        let extent = self.value.extent();
        self.selected = self.ticks.iter().position(|&x| x == extent);
        self.paint();
    }

    /// Register the tick handler. It receives the index of the tick snapped to.
    pub fn on_tick_changed(&mut self, handler: impl FnMut(usize) + 'static) {
        self.on_tick_changed.set(handler);
    }

    /// Snap the indicator to tick `index` and report it.
    ///
    /// Returns `false` for an index past the last tick.
    pub fn select_tick(&mut self, index: usize) -> bool {
        let Some(&x) = self.ticks.get(index) else {
            debug!(index, ticks = self.ticks.len(), "unknown tick");
            return false;
        };
        self.value.set_extent(x);
        self.selected = Some(index);
        self.paint();
        self.on_tick_changed.emit(index);
        self.machine.transition(WidgetState::Updating);
        true
    }

    fn paint(&mut self) {
        let x = self.value.extent() - INDICATOR / 2.0;
        self.shapes.place(self.indicator, Offset::new(x, 0.0));
        for (i, &mark) in self.tick_marks.iter().enumerate() {
            let fill = if self.selected == Some(i) {
                self.theme.accent
            } else {
                self.theme.idle
            };
            self.shapes.set_fill(mark, fill);
        }
    }
}

impl Widget for Slider {
    type Part = SliderPart;

    fn widget_type(&self) -> &'static str {
        "Slider"
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

    fn handle_event(&mut self, part: SliderPart, event: &InputEvent) {
        match (part, event) {
            (_, InputEvent::PointerEnter(_)) => self.machine.transition(WidgetState::Hover),
            (SliderPart::Track, InputEvent::PointerLeave(_)) => {
                self.machine.transition(WidgetState::Idle)
            }
            (SliderPart::Tick(index), InputEvent::Click(_)) => {
                self.select_tick(index);
            }
            _ => {}
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
