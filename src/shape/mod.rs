//! Renderer contract: shape handles and the factory that creates them.
//!
//! Widgets never draw. They ask a [`Renderer`] for shapes once, at
//! construction, and afterwards only issue commands through the returned
//! [`ShapeHandle`]s. The only values read back are shape extents, which the
//! clamping arithmetic needs.
//!
//! [`Scene`] is an in-memory renderer that records every command; hosts
//! without a drawing backend and the test suite use it.

pub mod group;
pub mod scene;

pub use group::{ShapeGroup, Slot};
pub use scene::{Scene, SceneShape, ShapeId, ShapeRecord};

use crate::theme::Color;

/// Primitive shape kinds a renderer must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
    Text,
}

/// Opaque handle to one shape owned by the renderer.
pub trait ShapeHandle {
    /// Move the shape's top-left corner to scene position (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    fn set_fill(&mut self, color: Color);

    /// Replace the text content. Text shapes re-measure themselves.
    fn set_text(&mut self, text: &str);

    fn show(&mut self);

    fn hide(&mut self);

    /// Change the extent of a rect or circle. Text shapes ignore this.
    fn resize(&mut self, width: f64, height: f64);

    fn width(&self) -> f64;

    fn height(&self) -> f64;
}

/// Factory for shape handles.
pub trait Renderer {
    fn rect(&mut self, width: f64, height: f64) -> Box<dyn ShapeHandle>;

    fn circle(&mut self, diameter: f64) -> Box<dyn ShapeHandle>;

    fn text(&mut self, content: &str) -> Box<dyn ShapeHandle>;
}
