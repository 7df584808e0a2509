//! Button widget: a clickable rectangle with a centered label.
//!
//! The body is filled according to the interaction state. A click is
//! reported only for a press and release that both happen on the button.

use crate::event::{InputEvent, PointerEvent};
use crate::geometry::{Offset, Size};
use crate::logic::ButtonLogic;
use crate::shape::{Renderer, ShapeGroup, Slot};
use crate::theme::Theme;
use crate::widget::{Widget, WidgetState};

use super::state_fill;

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A push button.
///
/// # Examples
///
/// ```
/// use widget_engine::shape::Scene;
/// use widget_engine::theme::Theme;
/// use widget_engine::widgets::Button;
///
/// let mut scene = Scene::new();
/// let button = Button::new(&mut scene, &Theme::default()).with_text("Submit");
/// assert_eq!(button.text(), "Submit");
/// assert!(scene.find_text("Submit").is_some());
/// ```
#[derive(Debug)]
pub struct Button {
    logic: ButtonLogic,
    shapes: ShapeGroup,
    body: Slot,
    label: Slot,
    text: String,
    /// Host-assigned identifier, e.g. for event routing.
    id: Option<String>,
    size: Size,
    theme: Theme,
}

impl Button {
    /// Default extent of the button body.
    pub const SIZE: Size = Size::new(100.0, 50.0);

    /// Create an unlabelled button at the scene origin.
    pub fn new(renderer: &mut dyn Renderer, theme: &Theme) -> Self {
        let mut shapes = ShapeGroup::new();
        let body = shapes.add(
            renderer.rect(Self::SIZE.width, Self::SIZE.height),
            Offset::ZERO,
        );
        let label = shapes.add(renderer.text(""), Offset::ZERO);
        shapes.set_fill(label, theme.text);

        let mut button = Self {
            logic: ButtonLogic::new(),
            shapes,
            body,
            label,
            text: String::new(),
            id: None,
            size: Self::SIZE,
            theme: theme.clone(),
        };
        button.center_label();
        button.paint();
        button
    }

    /// Set the label (builder pattern).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label and center it again.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.shapes.set_text(self.label, &self.text);
        self.center_label();
    }

    /// Set the identifier (builder pattern).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the body and center the label in it again.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
        self.shapes.resize(self.body, width, height);
        self.center_label();
    }

    /// Register the click handler. It receives the releasing pointer event.
    pub fn on_click(&mut self, handler: impl FnMut(PointerEvent) + 'static) {
        self.logic.on_click(handler);
    }

    /// Label position relative to the button's top-left corner.
    pub fn label_offset(&self) -> Offset {
        self.shapes.offset(self.label).unwrap_or(Offset::ZERO)
    }

    fn center_label(&mut self) {
        let at = self.size.center_of(self.shapes.size(self.label));
        self.shapes.place(self.label, at);
    }

    fn paint(&mut self) {
        let fill = state_fill(&self.theme, self.logic.state());
        self.shapes.set_fill(self.body, fill);
    }
}

impl Widget for Button {
    type Part = ();

    fn widget_type(&self) -> &'static str {
        "Button"
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

    fn handle_event(&mut self, _part: (), event: &InputEvent) {
        self.logic.handle(event);
        self.paint();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
