//! Widget trait: the surface every facade shares.
//!
//! Input arrives from the host tagged with the part of the widget it hit.
//! Single-shape widgets use `()` as their part; composite widgets name their
//! parts (scrollbar track vs. thumb, slider tick index, radio option index).

use std::fmt::Debug;

use crate::event::InputEvent;
use crate::geometry::Offset;
use crate::widget::WidgetState;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every widget facade.
pub trait Widget {
    /// Identifies which shape of the widget an event originated from.
    type Part: Copy + Debug;

    /// The widget type name (e.g. "Button", "ScrollBar").
    fn widget_type(&self) -> &'static str;

    /// Current interaction state.
    fn state(&self) -> WidgetState;

    /// Register the state-change subscriber, replacing any previous one.
    fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static);

    /// Move the widget's top-left corner to scene position (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Scene position of the widget's top-left corner.
    fn position(&self) -> Offset;

    /// Deliver one input event that hit `part`.
    ///
    /// Events the part does not react to are ignored.
    fn handle_event(&mut self, part: Self::Part, event: &InputEvent);
}

// ===========================================================================
// Tests
// ===========================================================================
