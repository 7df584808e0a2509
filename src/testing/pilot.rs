//! Pilot: programmatic interaction with a headless widget.
//!
//! The `Pilot` owns a widget and synthesizes the event sequences a pointer or
//! keyboard would produce, delivering them to a chosen part of the widget.
//! Pointer events carry the pilot's current pointer position, set with
//! [`at`](Pilot::at).

use crate::event::{InputEvent, Key, PointerEvent};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless widget driver for testing.
///
/// # Examples
///
/// ```
/// use widget_engine::shape::Scene;
/// use widget_engine::testing::{Pilot, Recorder};
/// use widget_engine::theme::Theme;
/// use widget_engine::widgets::Button;
///
/// let mut scene = Scene::new();
/// let mut button = Button::new(&mut scene, &Theme::default());
/// let clicks = Recorder::new();
/// button.on_click(clicks.sink());
///
/// let mut pilot = Pilot::new(button);
/// pilot.enter(()).click(());
/// assert_eq!(clicks.len(), 1);
/// ```
#[derive(Debug)]
pub struct Pilot<W: Widget> {
    widget: W,
    pointer: PointerEvent,
}

impl<W: Widget> Pilot<W> {
    /// Drive `widget`, with the pointer at the scene origin.
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            pointer: PointerEvent::default(),
        }
    }

    // ── Pointer position ─────────────────────────────────────────────

    /// Put the pointer at scene position (x, y) without sending anything.
    pub fn at(&mut self, x: f64, y: f64) -> &mut Self {
        self.pointer = PointerEvent::new(x, y);
        self
    }

    pub fn pointer(&self) -> PointerEvent {
        self.pointer
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Deliver an arbitrary event to `part`.
    pub fn send(&mut self, part: W::Part, event: InputEvent) -> &mut Self {
        self.widget.handle_event(part, &event);
        self
    }

    pub fn enter(&mut self, part: W::Part) -> &mut Self {
        self.send(part, InputEvent::PointerEnter(self.pointer))
    }

    pub fn leave(&mut self, part: W::Part) -> &mut Self {
        self.send(part, InputEvent::PointerLeave(self.pointer))
    }

    /// Pointer button down over `part`.
    pub fn press(&mut self, part: W::Part) -> &mut Self {
        self.send(part, InputEvent::PointerDown(self.pointer))
    }

    /// Pointer button up over `part`.
    pub fn release(&mut self, part: W::Part) -> &mut Self {
        self.send(part, InputEvent::PointerUp(self.pointer))
    }

    /// A full click: down, up, then the click event itself.
    pub fn click(&mut self, part: W::Part) -> &mut Self {
        self.press(part).release(part);
        self.send(part, InputEvent::Click(self.pointer))
    }

    /// Move the pointer to (x, y) over `part`.
    pub fn move_pointer(&mut self, part: W::Part, x: f64, y: f64) -> &mut Self {
        self.at(x, y);
        self.send(part, InputEvent::PointerMove(self.pointer))
    }

    /// Release one key over `part`.
    pub fn key(&mut self, part: W::Part, key: Key) -> &mut Self {
        self.send(part, InputEvent::KeyUp(key))
    }

    /// Release one key per character of `text`.
    pub fn type_text(&mut self, part: W::Part, text: &str) -> &mut Self {
        for ch in text.chars() {
            self.key(part, Key::Char(ch));
        }
        self
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Stop driving and hand the widget back.
    pub fn into_inner(self) -> W {
        self.widget
    }
}

// ===========================================================================
// Tests
// ===========================================================================
