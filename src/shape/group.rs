//! Shapes that move together.

use super::ShapeHandle;
use crate::geometry::{Offset, Size};
use crate::theme::Color;

/// Index of a shape within its [`ShapeGroup`].
pub type Slot = usize;

struct Member {
    handle: Box<dyn ShapeHandle>,
    /// Position relative to the group origin.
    offset: Offset,
}

/// A set of shapes positioned relative to a shared origin.
///
/// Moving the group moves every member, keeping their relative layout.
pub struct ShapeGroup {
    origin: Offset,
    members: Vec<Member>,
}

impl ShapeGroup {
    pub fn new() -> Self {
        Self {
            origin: Offset::ZERO,
            members: Vec::new(),
        }
    }

    /// Add `handle` at `offset` from the origin and place it there.
    pub fn add(&mut self, handle: Box<dyn ShapeHandle>, offset: Offset) -> Slot {
        let mut member = Member { handle, offset };
        let at = self.origin + offset;
        member.handle.move_to(at.x, at.y);
        self.members.push(member);
        self.members.len() - 1
    }

    pub fn origin(&self) -> Offset {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Move the origin to (x, y), carrying every member along.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.origin = Offset::new(x, y);
        for member in &mut self.members {
            let at = self.origin + member.offset;
            member.handle.move_to(at.x, at.y);
        }
    }

    /// Reposition one member relative to the origin.
    pub fn place(&mut self, slot: Slot, offset: Offset) {
        if let Some(member) = self.members.get_mut(slot) {
            member.offset = offset;
            let at = self.origin + offset;
            member.handle.move_to(at.x, at.y);
        }
    }

    /// Offset of one member relative to the origin.
    pub fn offset(&self, slot: Slot) -> Option<Offset> {
        self.members.get(slot).map(|m| m.offset)
    }

    pub fn shape(&self, slot: Slot) -> Option<&dyn ShapeHandle> {
        self.members.get(slot).map(|m| m.handle.as_ref())
    }

    pub fn shape_mut(&mut self, slot: Slot) -> Option<&mut (dyn ShapeHandle + 'static)> {
        self.members.get_mut(slot).map(|m| m.handle.as_mut())
    }

    /// Measured extent of one member, zero for an unknown slot.
    pub fn size(&self, slot: Slot) -> Size {
        self.shape(slot)
            .map(|s| Size::new(s.width(), s.height()))
            .unwrap_or(Size::ZERO)
    }

    // ── Member commands ──────────────────────────────────────────────

    pub fn set_fill(&mut self, slot: Slot, color: Color) {
        if let Some(shape) = self.shape_mut(slot) {
            shape.set_fill(color);
        }
    }

    pub fn set_text(&mut self, slot: Slot, text: &str) {
        if let Some(shape) = self.shape_mut(slot) {
            shape.set_text(text);
        }
    }

    pub fn set_visible(&mut self, slot: Slot, visible: bool) {
        if let Some(shape) = self.shape_mut(slot) {
            if visible {
                shape.show();
            } else {
                shape.hide();
            }
        }
    }

    pub fn resize(&mut self, slot: Slot, width: f64, height: f64) {
        if let Some(shape) = self.shape_mut(slot) {
            shape.resize(width, height);
        }
    }
}

impl Default for ShapeGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShapeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeGroup")
            .field("origin", &self.origin)
            .field("members", &self.members.len())
            .finish()
    }
}
