//! In-memory renderer backed by a slotmap arena.
//!
//! Every shape lives in a single `SlotMap` shared between the [`Scene`] and
//! the [`SceneShape`] handles it gives out. Handles write through to the
//! arena, so the scene always reflects the last command issued to each shape.
//! Dropping a handle removes its shape.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use super::{Renderer, ShapeHandle, ShapeKind};
use crate::geometry::{Offset, Size};
use crate::theme::Color;

new_key_type! {
    /// Identifier of a shape in a [`Scene`]. Copy, lightweight (u64).
    pub struct ShapeId;
}

/// Last known state of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub kind: ShapeKind,
    pub position: Offset,
    pub size: Size,
    pub fill: Option<Color>,
    /// Text content; always empty for rects and circles.
    pub text: String,
    pub visible: bool,
}

impl ShapeRecord {
    fn new(kind: ShapeKind, size: Size) -> Self {
        Self {
            kind,
            position: Offset::ZERO,
            size,
            fill: None,
            text: String::new(),
            visible: true,
        }
    }
}

struct SceneInner {
    shapes: SlotMap<ShapeId, ShapeRecord>,
    /// Advance and line height of one glyph for text measurement.
    glyph: Size,
}

fn measure(glyph: Size, text: &str) -> Size {
    Size::new(glyph.width * text.chars().count() as f64, glyph.height)
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// A recording renderer. Cloning yields another view of the same arena.
#[derive(Clone)]
pub struct Scene {
    inner: Rc<RefCell<SceneInner>>,
}

impl Scene {
    /// Default glyph box used for text measurement.
    pub const DEFAULT_GLYPH: Size = Size::new(8.0, 16.0);

    /// Create an empty scene with the default glyph box.
    pub fn new() -> Self {
        Self::with_glyph_size(Self::DEFAULT_GLYPH.width, Self::DEFAULT_GLYPH.height)
    }

    /// Create an empty scene whose text is `width` pixels per character.
    pub fn with_glyph_size(width: f64, height: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SceneInner {
                shapes: SlotMap::with_key(),
                glyph: Size::new(width, height),
            })),
        }
    }

    /// Snapshot of one shape.
    pub fn get(&self, id: ShapeId) -> Option<ShapeRecord> {
        self.inner.borrow().shapes.get(id).cloned()
    }

    /// Number of live shapes.
    pub fn len(&self) -> usize {
        self.inner.borrow().shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All live shapes in arena order, which is creation order until a shape
    /// is removed and its slot reused.
    pub fn records(&self) -> Vec<(ShapeId, ShapeRecord)> {
        self.inner
            .borrow()
            .shapes
            .iter()
            .map(|(id, record)| (id, record.clone()))
            .collect()
    }

    /// Ids of every live shape of `kind`, in arena order.
    pub fn shapes_of_kind(&self, kind: ShapeKind) -> Vec<ShapeId> {
        self.inner
            .borrow()
            .shapes
            .iter()
            .filter(|(_, record)| record.kind == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// The first text shape whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<ShapeId> {
        self.inner
            .borrow()
            .shapes
            .iter()
            .find(|(_, record)| record.kind == ShapeKind::Text && record.text == text)
            .map(|(id, _)| id)
    }

    fn insert(&mut self, record: ShapeRecord) -> Box<dyn ShapeHandle> {
        let id = self.inner.borrow_mut().shapes.insert(record);
        Box::new(SceneShape {
            id,
            scene: self.clone(),
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene").field("shapes", &self.len()).finish()
    }
}

impl Renderer for Scene {
    fn rect(&mut self, width: f64, height: f64) -> Box<dyn ShapeHandle> {
        self.insert(ShapeRecord::new(ShapeKind::Rect, Size::new(width, height)))
    }

    fn circle(&mut self, diameter: f64) -> Box<dyn ShapeHandle> {
        self.insert(ShapeRecord::new(
            ShapeKind::Circle,
            Size::new(diameter, diameter),
        ))
    }

    fn text(&mut self, content: &str) -> Box<dyn ShapeHandle> {
        let size = measure(self.inner.borrow().glyph, content);
        let mut record = ShapeRecord::new(ShapeKind::Text, size);
        record.text = content.to_string();
        self.insert(record)
    }
}

// ---------------------------------------------------------------------------
// SceneShape
// ---------------------------------------------------------------------------

/// Handle to a shape stored in a [`Scene`].
pub struct SceneShape {
    id: ShapeId,
    scene: Scene,
}

impl SceneShape {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    fn update(&self, f: impl FnOnce(&mut ShapeRecord, Size)) {
        let mut inner = self.scene.inner.borrow_mut();
        let glyph = inner.glyph;
        if let Some(record) = inner.shapes.get_mut(self.id) {
            f(record, glyph);
        }
    }

    fn size(&self) -> Size {
        self.scene
            .inner
            .borrow()
            .shapes
            .get(self.id)
            .map(|record| record.size)
            .unwrap_or(Size::ZERO)
    }
}

impl ShapeHandle for SceneShape {
    fn move_to(&mut self, x: f64, y: f64) {
        self.update(|record, _| record.position = Offset::new(x, y));
    }

    fn set_fill(&mut self, color: Color) {
        self.update(|record, _| record.fill = Some(color));
    }

    fn set_text(&mut self, text: &str) {
        self.update(|record, glyph| {
            if record.kind == ShapeKind::Text {
                record.text = text.to_string();
                record.size = measure(glyph, text);
            }
        });
    }

    fn show(&mut self) {
        self.update(|record, _| record.visible = true);
    }

    fn hide(&mut self) {
        self.update(|record, _| record.visible = false);
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.update(|record, _| {
            if record.kind != ShapeKind::Text {
                record.size = Size::new(width, height);
            }
        });
    }

    fn width(&self) -> f64 {
        self.size().width
    }

    fn height(&self) -> f64 {
        self.size().height
    }
}

impl Drop for SceneShape {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.scene.inner.try_borrow_mut() {
            inner.shapes.remove(self.id);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_is_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn rect_records_size_and_defaults() {
        let mut scene = Scene::new();
        let _rect = scene.rect(100.0, 50.0);
        let (_, record) = scene.records().remove(0);
        assert_eq!(record.kind, ShapeKind::Rect);
        assert_eq!(record.size, Size::new(100.0, 50.0));
        assert_eq!(record.position, Offset::ZERO);
        assert_eq!(record.fill, None);
        assert!(record.visible);
    }

    #[test]
    fn commands_write_through() {
        let mut scene = Scene::new();
        let mut rect = scene.rect(10.0, 10.0);
        rect.move_to(3.0, 4.0);
        rect.set_fill(Color::BLUE);
        rect.hide();
        let (_, record) = scene.records().remove(0);
        assert_eq!(record.position, Offset::new(3.0, 4.0));
        assert_eq!(record.fill, Some(Color::BLUE));
        assert!(!record.visible);

        rect.show();
        assert!(scene.records()[0].1.visible);
    }

    #[test]
    fn text_is_measured_by_glyph() {
        let mut scene = Scene::with_glyph_size(10.0, 20.0);
        let mut text = scene.text("abc");
        assert_eq!(text.width(), 30.0);
        assert_eq!(text.height(), 20.0);
        text.set_text("abcde");
        assert_eq!(text.width(), 50.0);
        text.set_text("");
        assert_eq!(text.width(), 0.0);
    }

    #[test]
    fn resize_ignored_for_text() {
        let mut scene = Scene::new();
        let mut text = scene.text("ab");
        text.resize(500.0, 500.0);
        assert_eq!(text.width(), 16.0);

        let mut rect = scene.rect(1.0, 1.0);
        rect.resize(40.0, 2.0);
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn circle_is_square() {
        let mut scene = Scene::new();
        let circle = scene.circle(12.0);
        assert_eq!(circle.width(), 12.0);
        assert_eq!(circle.height(), 12.0);
        assert_eq!(scene.shapes_of_kind(ShapeKind::Circle).len(), 1);
    }

    #[test]
    fn find_text_and_get() {
        let mut scene = Scene::new();
        let _a = scene.rect(1.0, 1.0);
        let _b = scene.text("label");
        let id = scene.find_text("label").unwrap();
        assert_eq!(scene.get(id).unwrap().text, "label");
        assert!(scene.find_text("missing").is_none());
    }

    #[test]
    fn clones_share_the_arena() {
        let scene = Scene::new();
        let mut factory = scene.clone();
        let _shape = factory.rect(5.0, 5.0);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn dropping_a_handle_removes_its_shape() {
        let mut scene = Scene::new();
        let keep = scene.rect(1.0, 1.0);
        let gone = scene.circle(2.0);
        assert_eq!(scene.len(), 2);
        drop(gone);
        assert_eq!(scene.len(), 1);
        assert!(scene.shapes_of_kind(ShapeKind::Circle).is_empty());
        assert_eq!(keep.width(), 1.0);
    }
}
