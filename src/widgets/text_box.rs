//! TextBox widget: a single-line text input field.
//!
//! Keystrokes append at the end or, for Backspace, remove the last
//! character. A character is accepted only while the measured text stays
//! narrower than the frame minus the theme's text padding. The caret is a
//! thin bar after the last character, shown while the pointer is over the
//! field.

use crate::event::{InputEvent, Key};
use crate::geometry::{Offset, Size};
use crate::logic::TextEdit;
use crate::shape::{Renderer, ShapeGroup, Slot};
use crate::theme::Theme;
use crate::widget::{Widget, WidgetState};

const CARET_WIDTH: f64 = 1.0;

// ---------------------------------------------------------------------------
// TextBox
// ---------------------------------------------------------------------------

/// A text input field.
#[derive(Debug)]
pub struct TextBox {
    logic: TextEdit,
    shapes: ShapeGroup,
    frame: Slot,
    text: Slot,
    caret: Slot,
    size: Size,
    padding: f64,
}

impl TextBox {
    /// Default frame extent.
    pub const SIZE: Size = Size::new(200.0, 30.0);

    /// Build an empty field of the default size.
    pub fn new(renderer: &mut dyn Renderer, theme: &Theme) -> Self {
        let size = Self::SIZE;
        let mut shapes = ShapeGroup::new();
        let frame = shapes.add(renderer.rect(size.width, size.height), Offset::ZERO);
        shapes.set_fill(frame, theme.track);
        let text = shapes.add(renderer.text(""), Offset::ZERO);
        shapes.set_fill(text, theme.text);
        let line = shapes.size(text).height;
        let caret = shapes.add(renderer.rect(CARET_WIDTH, line), Offset::ZERO);
        shapes.set_fill(caret, theme.caret);

        let mut text_box = Self {
            logic: TextEdit::new(),
            shapes,
            frame,
            text,
            caret,
            size,
            padding: theme.text_padding,
        };
        text_box.paint();
        text_box
    }

    pub fn text(&self) -> &str {
        self.logic.text()
    }

    /// Replace the content without notifying the text handler.
    ///
    /// The content is not measured against the frame.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.logic.set_text(text);
        self.paint();
    }

    pub fn caret_visible(&self) -> bool {
        self.logic.caret_visible()
    }

    /// Caret position in characters. Always the text length.
    pub fn caret_position(&self) -> usize {
        self.logic.caret()
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Change the frame width. Existing text is kept even if it no longer
    /// fits; only later keystrokes are measured against the new width.
    pub fn set_width(&mut self, width: f64) {
        self.size.width = width;
        self.shapes.resize(self.frame, width, self.size.height);
    }

    /// Change the frame height. The text stays vertically centered.
    pub fn set_height(&mut self, height: f64) {
        self.size.height = height;
        self.shapes.resize(self.frame, self.size.width, height);
        self.paint();
    }

    /// Register the text handler. It receives the whole content after each
    /// change.
    pub fn on_text_changed(&mut self, handler: impl FnMut(String) + 'static) {
        self.logic.on_text_changed(handler);
    }

    fn key_up(&mut self, key: &Key) {
        let limit = self.size.width - self.padding;
        let Self {
            logic,
            shapes,
            text,
            ..
        } = self;
        logic.key_up(key, |candidate| {
            shapes.set_text(*text, candidate);
            shapes.size(*text).width < limit
        });
    }

    fn paint(&mut self) {
        self.shapes.set_text(self.text, self.logic.text());
        let size = self.shapes.size(self.text);
        let y = self.size.center_of(size).y;
        self.shapes.place(self.text, Offset::new(self.padding, y));
        self.shapes
            .place(self.caret, Offset::new(self.padding + size.width, y));
        self.shapes.set_visible(self.caret, self.logic.caret_visible());
    }
}

impl Widget for TextBox {
    type Part = ();

    fn widget_type(&self) -> &'static str {
        "TextBox"
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
            InputEvent::KeyUp(key) => self.key_up(key),
            _ => return,
        }
        self.paint();
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Scene, ShapeKind};
    use crate::testing::{Pilot, Recorder};
    use pretty_assertions::assert_eq;

    fn caret(scene: &Scene) -> crate::shape::ShapeRecord {
        let id = scene.shapes_of_kind(ShapeKind::Rect)[1];
        scene.get(id).unwrap()
    }

    fn rendered_text(scene: &Scene) -> String {
        let id = scene.shapes_of_kind(ShapeKind::Text)[0];
        scene.get(id).unwrap().text
    }

    // ── Editing ──────────────────────────────────────────────────────

    #[test]
    fn round_trip_fires_on_each_mutation() {
        let texts = Recorder::new();
        let mut scene = Scene::new();
        let mut t = TextBox::new(&mut scene, &Theme::default());
        t.on_text_changed(texts.sink());
        let mut pilot = Pilot::new(t);

        pilot
            .type_text((), "Hi")
            .key((), Key::Backspace)
            .key((), Key::Backspace)
            .key((), Key::Backspace);
        assert_eq!(pilot.widget().text(), "");
        assert_eq!(rendered_text(&scene), "");
        assert_eq!(
            texts.take(),
            vec!["H".to_string(), "Hi".into(), "H".into(), "".into()]
        );
    }

    #[test]
    fn overflowing_keystroke_is_dropped() {
        // 8px glyphs, 200px frame, 5px padding: 24 characters fit.
        let texts = Recorder::new();
        let mut scene = Scene::new();
        let mut t = TextBox::new(&mut scene, &Theme::default());
        t.on_text_changed(texts.sink());
        let mut pilot = Pilot::new(t);

        pilot.type_text((), &"x".repeat(30));
        assert_eq!(pilot.widget().text().len(), 24);
        assert_eq!(texts.len(), 24);
        assert_eq!(rendered_text(&scene), "x".repeat(24));
    }

    #[test]
    fn modifiers_and_named_keys_do_nothing() {
        let texts = Recorder::new();
        let states = Recorder::new();
        let mut t = TextBox::new(&mut Scene::new(), &Theme::default());
        t.on_text_changed(texts.sink());
        t.on_state_change(states.sink());
        let mut pilot = Pilot::new(t);

        pilot
            .key((), Key::Control)
            .key((), Key::Shift)
            .key((), Key::from_name("ArrowLeft"));
        assert!(texts.is_empty());
        assert_eq!(states.len(), 6);
    }

    #[test]
    fn set_text_is_silent() {
        let texts = Recorder::new();
        let mut scene = Scene::new();
        let mut t = TextBox::new(&mut scene, &Theme::default());
        t.on_text_changed(texts.sink());
        t.set_text("preset");
        assert_eq!(t.text(), "preset");
        assert_eq!(t.caret_position(), 6);
        assert_eq!(rendered_text(&scene), "preset");
        assert!(texts.is_empty());
    }

    #[test]
    fn narrower_field_fits_fewer_characters() {
        let mut t = TextBox::new(&mut Scene::new(), &Theme::default());
        t.set_width(45.0);
        let mut pilot = Pilot::new(t);
        pilot.type_text((), "abcdefgh");
        // 8 * 5 = 40 is not below 45 - 5.
        assert_eq!(pilot.widget().text(), "abcd");
    }

    // ── Caret ────────────────────────────────────────────────────────

    #[test]
    fn taller_frame_recenters_text() {
        let mut scene = Scene::new();
        let mut t = TextBox::new(&mut scene, &Theme::default());
        t.set_text("hi");
        let text = scene.find_text("hi").unwrap();
        assert_eq!(scene.get(text).unwrap().position.y, 7.0);

        t.set_height(50.0);
        assert_eq!(t.height(), 50.0);
        assert_eq!(scene.get(text).unwrap().position.y, 17.0);
        let frame = scene.shapes_of_kind(ShapeKind::Rect)[0];
        assert_eq!(scene.get(frame).unwrap().size, Size::new(200.0, 50.0));
    }

    #[test]
    fn caret_shows_on_hover() {
        let mut scene = Scene::new();
        let mut pilot = Pilot::new(TextBox::new(&mut scene, &Theme::default()));
        assert!(!caret(&scene).visible);
        pilot.enter(());
        assert!(caret(&scene).visible);
        assert!(pilot.widget().caret_visible());
        pilot.leave(());
        assert!(!caret(&scene).visible);
    }

    #[test]
    fn caret_follows_text_end() {
        let mut scene = Scene::new();
        let mut pilot = Pilot::new(TextBox::new(&mut scene, &Theme::default()));
        pilot.type_text((), "abc");
        assert_eq!(caret(&scene).position, Offset::new(5.0 + 24.0, 7.0));
        assert_eq!(pilot.widget().caret_position(), 3);
    }
}
