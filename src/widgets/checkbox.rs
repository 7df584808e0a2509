//! CheckBox widget: a box, a check mark, and a label.

use crate::event::InputEvent;
use crate::geometry::{Offset, Size};
use crate::logic::{CheckState, ToggleLogic};
use crate::shape::{Renderer, ShapeGroup, Slot};
use crate::theme::Theme;
use crate::widget::{Widget, WidgetState};

use super::state_fill;

/// Edge length of the box.
const BOX: f64 = 20.0;
/// Edge length of the check mark, centered in the box.
const MARK: f64 = 12.0;
/// Horizontal gap between the box and the label.
const LABEL_GAP: f64 = 8.0;

/// A two-state check box. Clicking anywhere on it flips the check state.
#[derive(Debug)]
pub struct CheckBox {
    logic: ToggleLogic,
    shapes: ShapeGroup,
    frame: Slot,
    mark: Slot,
    label: Slot,
    text: String,
    theme: Theme,
}

impl CheckBox {
    pub fn new(renderer: &mut dyn Renderer, theme: &Theme) -> Self {
        let mut shapes = ShapeGroup::new();
        let frame = shapes.add(renderer.rect(BOX, BOX), Offset::ZERO);
        let inset = (BOX - MARK) / 2.0;
        let mark = shapes.add(renderer.rect(MARK, MARK), Offset::new(inset, inset));
        shapes.set_fill(mark, theme.accent);
        let label = shapes.add(renderer.text(""), Offset::ZERO);
        shapes.set_fill(label, theme.text);

        let mut checkbox = Self {
            logic: ToggleLogic::new(),
            shapes,
            frame,
            mark,
            label,
            text: String::new(),
            theme: theme.clone(),
        };
        checkbox.place_label();
        checkbox.paint();
        checkbox
    }

    /// Set the label (builder pattern).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.set_label(text);
        self
    }

    pub fn label(&self) -> &str {
        &self.text
    }

    pub fn set_label(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.shapes.set_text(self.label, &self.text);
        self.place_label();
    }

    pub fn check_state(&self) -> CheckState {
        self.logic.check_state()
    }

    pub fn is_checked(&self) -> bool {
        self.logic.check_state().is_checked()
    }

    /// Check or uncheck without notifying the check handler.
    pub fn set_checked(&mut self, checked: bool) {
        self.logic.set_check_state(CheckState::from(checked));
        self.paint();
    }

    /// Register the check handler. It receives the state after each flip.
    pub fn on_check_changed(&mut self, handler: impl FnMut(CheckState) + 'static) {
        self.logic.on_check_changed(handler);
    }

    fn place_label(&mut self) {
        let height = self.shapes.size(self.label).height;
        let y = Size::new(0.0, BOX).center_of(Size::new(0.0, height)).y;
        self.shapes.place(self.label, Offset::new(BOX + LABEL_GAP, y));
    }

    fn paint(&mut self) {
        let fill = state_fill(&self.theme, self.logic.state());
        self.shapes.set_fill(self.frame, fill);
        self.shapes.set_visible(self.mark, self.is_checked());
    }
}

impl Widget for CheckBox {
    type Part = ();

    fn widget_type(&self) -> &'static str {
        "CheckBox"
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
        match event {
            InputEvent::PointerEnter(_) => self.logic.pointer_enter(),
            InputEvent::PointerLeave(_) => self.logic.pointer_leave(),
            InputEvent::Click(_) => {
                self.logic.click();
            }
            _ => return,
        }
        self.paint();
    }
}
