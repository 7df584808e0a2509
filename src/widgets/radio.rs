//! RadioGroup widget: a vertical list of mutually exclusive options.
//!
//! Every option is drawn as a ring, a dot shown only while the option is
//! selected, and a label. Events are tagged with the option index.

use crate::event::InputEvent;
use crate::geometry::{Offset, Size};
use crate::logic::{ExclusiveGroup, RadioOption};
use crate::shape::{Renderer, ShapeGroup, Slot};
use crate::theme::Theme;
use crate::widget::{Widget, WidgetState};

const RING: f64 = 20.0;
const DOT: f64 = 10.0;
/// Vertical distance between consecutive options.
const ROW: f64 = 30.0;
const LABEL_GAP: f64 = 8.0;

#[derive(Debug)]
struct OptionShapes {
    ring: Slot,
    dot: Slot,
}

/// A group of options of which at most one is selected.
#[derive(Debug)]
pub struct RadioGroup {
    logic: ExclusiveGroup,
    shapes: ShapeGroup,
    rows: Vec<OptionShapes>,
    theme: Theme,
}

impl RadioGroup {
    /// Build a group. If several options arrive selected, the last one wins.
    pub fn new<I, O>(renderer: &mut dyn Renderer, theme: &Theme, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<RadioOption>,
    {
        let logic = ExclusiveGroup::new(options.into_iter().map(Into::into));
        let mut shapes = ShapeGroup::new();
        let mut rows = Vec::with_capacity(logic.len());

        for (i, option) in logic.options().iter().enumerate() {
            let top = i as f64 * ROW;
            let ring = shapes.add(renderer.circle(RING), Offset::new(0.0, top));
            let inset = (RING - DOT) / 2.0;
            let dot = shapes.add(renderer.circle(DOT), Offset::new(inset, top + inset));
            shapes.set_fill(dot, theme.accent);

            let label = shapes.add(renderer.text(&option.label), Offset::ZERO);
            shapes.set_fill(label, theme.text);
            let height = shapes.size(label).height;
            let y = Size::new(0.0, RING).center_of(Size::new(0.0, height)).y;
            shapes.place(label, Offset::new(RING + LABEL_GAP, top + y));

            rows.push(OptionShapes { ring, dot });
        }

        let mut group = Self {
            logic,
            shapes,
            rows,
            theme: theme.clone(),
        };
        group.paint();
        group
    }

    pub fn options(&self) -> &[RadioOption] {
        self.logic.options()
    }

    pub fn len(&self) -> usize {
        self.logic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logic.is_empty()
    }

    /// Index of the selected option, if any.
    pub fn selected(&self) -> Option<usize> {
        self.logic.selected()
    }

    /// Register the selection handler. It receives the selected index.
    pub fn on_check_changed(&mut self, handler: impl FnMut(usize) + 'static) {
        self.logic.on_check_changed(handler);
    }

    fn paint(&mut self) {
        let hovered = self.logic.hovered();
        for (i, row) in self.rows.iter().enumerate() {
            let ring = if hovered == Some(i) {
                self.theme.hover
            } else {
                self.theme.idle
            };
            self.shapes.set_fill(row.ring, ring);
            let selected = self.logic.options()[i].selected;
            self.shapes.set_visible(row.dot, selected);
        }
    }
}

impl Widget for RadioGroup {
    /// Index of the option the event hit.
    type Part = usize;

    fn widget_type(&self) -> &'static str {
        "RadioGroup"
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

    fn handle_event(&mut self, index: usize, event: &InputEvent) {
        match event {
            InputEvent::PointerEnter(_) => self.logic.pointer_enter(index),
            InputEvent::PointerLeave(_) => self.logic.pointer_leave(index),
            InputEvent::Click(_) => {
                self.logic.select(index);
            }
            _ => return,
        }
        self.paint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Scene, ShapeKind};
    use crate::testing::{Pilot, Recorder};
    use crate::theme::Color;
    use pretty_assertions::assert_eq;

    fn visible_dots(scene: &Scene) -> Vec<bool> {
        // Rings and dots alternate in creation order.
        scene
            .shapes_of_kind(ShapeKind::Circle)
            .into_iter()
            .skip(1)
            .step_by(2)
            .map(|id| scene.get(id).map(|r| r.visible).unwrap_or(false))
            .collect()
    }

    #[test]
    fn construction_normalizes() {
        let mut scene = Scene::new();
        let group = RadioGroup::new(
            &mut scene,
            &Theme::default(),
            [("a", true), ("b", false), ("c", true)],
        );
        assert_eq!(group.selected(), Some(2));
        assert_eq!(visible_dots(&scene), vec![false, false, true]);
    }

    #[test]
    fn click_selects_exactly_one() {
        let checks = Recorder::new();
        let mut scene = Scene::new();
        let mut group = RadioGroup::new(&mut scene, &Theme::default(), ["a", "b", "c"]);
        group.on_check_changed(checks.sink());
        let mut pilot = Pilot::new(group);

        pilot.click(1);
        assert_eq!(visible_dots(&scene), vec![false, true, false]);
        pilot.click(0);
        assert_eq!(visible_dots(&scene), vec![true, false, false]);
        assert_eq!(checks.take(), vec![1, 0]);
        assert_eq!(pilot.widget().state(), WidgetState::Pressed);
    }

    #[test]
    fn rows_are_stacked() {
        let mut scene = Scene::new();
        let mut group = RadioGroup::new(&mut scene, &Theme::default(), ["one", "two"]);
        group.move_to(10.0, 10.0);
        let two = scene.get(scene.find_text("two").unwrap()).unwrap();
        assert_eq!(two.position, Offset::new(38.0, 42.0));
    }

    #[test]
    fn hover_paints_only_that_ring() {
        let mut scene = Scene::new();
        let group = RadioGroup::new(&mut scene, &Theme::default(), ["a", "b"]);
        let mut pilot = Pilot::new(group);
        pilot.enter(1);

        let rings: Vec<_> = scene
            .shapes_of_kind(ShapeKind::Circle)
            .into_iter()
            .step_by(2)
            .map(|id| scene.get(id).unwrap().fill)
            .collect();
        assert_eq!(rings, vec![Some(Color::RED), Some(Color::BLUE)]);
    }

    #[test]
    fn empty_group_draws_nothing() {
        let mut scene = Scene::new();
        let mut pilot = Pilot::new(RadioGroup::new(
            &mut scene,
            &Theme::default(),
            Vec::<RadioOption>::new(),
        ));
        pilot.click(0);
        assert!(scene.is_empty());
        assert!(pilot.widget().is_empty());
        assert_eq!(pilot.widget().selected(), None);
    }
}
