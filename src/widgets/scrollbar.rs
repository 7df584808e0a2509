//! ScrollBar widget: a vertical track with a draggable thumb and two step
//! buttons.
//!
//! Layout, relative to the widget origin: the track spans `0..height`; the
//! step-up button covers the top of the track, so the thumb's top clamp is
//! the button's edge length; the step-down button sits directly below the
//! track. Pointer coordinates are converted to track-local y before they
//! reach the thumb logic.

use crate::error::WidgetError;
use crate::event::InputEvent;
use crate::geometry::Offset;
use crate::logic::{Direction, DragThumb};
use crate::shape::{Renderer, ShapeGroup, Slot};
use crate::theme::Theme;
use crate::widget::{Widget, WidgetState};

/// The shape of a scrollbar an event hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollPart {
    Track,
    Thumb,
    StepUp,
    StepDown,
}

/// A vertical scrollbar.
#[derive(Debug)]
pub struct ScrollBar {
    logic: DragThumb,
    shapes: ShapeGroup,
    track: Slot,
    thumb: Slot,
    step_down: Slot,
    width: f64,
    theme: Theme,
}

impl ScrollBar {
    /// Build a scrollbar whose track is `height` pixels tall.
    ///
    /// The width equals the theme's step button size. Fails when the track
    /// cannot hold the step-up button and the thumb.
    pub fn new(
        renderer: &mut dyn Renderer,
        theme: &Theme,
        height: f64,
    ) -> Result<Self, WidgetError> {
        let width = theme.step_button;
        let logic = DragThumb::new(height, theme.step_button, theme.scroll_step)?;

        let mut shapes = ShapeGroup::new();
        let track = shapes.add(renderer.rect(width, height), Offset::ZERO);
        shapes.set_fill(track, theme.track);
        let thumb = shapes.add(
            renderer.rect(width, logic.thumb_height()),
            Offset::new(0.0, logic.offset()),
        );
        let step_up = shapes.add(renderer.rect(width, width), Offset::ZERO);
        shapes.set_fill(step_up, theme.idle);
        let step_down = shapes.add(renderer.rect(width, width), Offset::new(0.0, height));
        shapes.set_fill(step_down, theme.idle);

        let mut scrollbar = Self {
            logic,
            shapes,
            track,
            thumb,
            step_down,
            width,
            theme: theme.clone(),
        };
        scrollbar.paint();
        Ok(scrollbar)
    }

    pub fn height(&self) -> f64 {
        self.logic.track_height()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Track-local y of the thumb's top edge.
    pub fn thumb_offset(&self) -> f64 {
        self.logic.offset()
    }

    pub fn thumb_height(&self) -> f64 {
        self.logic.thumb_height()
    }

    /// Thumb position as a percentage of its travel.
    pub fn percent(&self) -> f64 {
        self.logic.percent()
    }

    pub fn is_dragging(&self) -> bool {
        self.logic.is_dragging()
    }

    /// Register the scroll handler. It receives the direction of travel.
    pub fn on_scroll_moved(&mut self, handler: impl FnMut(Direction) + 'static) {
        self.logic.on_scroll_moved(handler);
    }

    /// Step the thumb up, as if the step-up button were clicked.
    pub fn step_up(&mut self) -> bool {
        let moved = self.logic.step_up();
        self.paint();
        moved
    }

    /// Step the thumb down, as if the step-down button were clicked.
    pub fn step_down(&mut self) -> bool {
        let moved = self.logic.step_down();
        self.paint();
        moved
    }

    /// Change the track height, keeping the thumb's percentage.
    ///
    /// On error the scrollbar is left unchanged.
    pub fn set_height(&mut self, height: f64) -> Result<(), WidgetError> {
        self.logic.set_track_height(height)?;
        self.shapes.resize(self.track, self.width, height);
        self.shapes.resize(self.thumb, self.width, self.logic.thumb_height());
        self.shapes.place(self.step_down, Offset::new(0.0, height));
        self.paint();
        Ok(())
    }

    fn local_y(&self, event: &InputEvent) -> Option<f64> {
        event.pointer().map(|p| p.y - self.shapes.origin().y)
    }

    fn paint(&mut self) {
        self.shapes.place(self.thumb, Offset::new(0.0, self.logic.offset()));
        let fill = if self.logic.is_dragging() {
            self.theme.pressed
        } else {
            self.theme.thumb
        };
        self.shapes.set_fill(self.thumb, fill);
    }
}

impl Widget for ScrollBar {
    type Part = ScrollPart;

    fn widget_type(&self) -> &'static str {
        "ScrollBar"
    }

    fn state(&self) -> WidgetState {
        self.logic.state()
    }

    fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.logic.on_state_change(handler);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.shapes.move_to(x, y);
    }

    fn position(&self) -> Offset {
        self.shapes.origin()
    }

    fn handle_event(&mut self, part: ScrollPart, event: &InputEvent) {
        use ScrollPart::*;

        match (part, event) {
            (StepUp, InputEvent::Click(_)) => {
                self.logic.step_up();
            }
            (StepDown, InputEvent::Click(_)) => {
                self.logic.step_down();
            }
            (Track | Thumb, InputEvent::PointerEnter(_)) => self.logic.pointer_enter(),
            // The thumb lies on the track; only leaving the track counts.
            (Track, InputEvent::PointerLeave(_)) => self.logic.pointer_leave(),
            (Thumb, InputEvent::PointerDown(_)) => {
                if let Some(y) = self.local_y(event) {
                    self.logic.thumb_down(y);
                }
            }
            (Track | Thumb, InputEvent::PointerMove(_)) => {
                if let Some(y) = self.local_y(event) {
                    self.logic.drag_to(y);
                }
            }
            (Track | Thumb, InputEvent::PointerUp(_)) => self.logic.pointer_up(),
            _ => return,
        }
        self.paint();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
