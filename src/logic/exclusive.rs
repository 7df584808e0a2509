//! Mutual-exclusion selection for radio groups.
//!
//! The group owns its options collectively. At most one option is selected at
//! any time; construction normalizes the input so that when several options
//! arrive selected, the last of them wins. A group may start with nothing
//! selected, and may be empty.

use tracing::debug;

use crate::event::Callback;
use crate::widget::{StateMachine, WidgetState};

/// One labelled choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub label: String,
    pub selected: bool,
}

impl RadioOption {
    pub fn new(label: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            selected,
        }
    }
}

impl From<&str> for RadioOption {
    fn from(label: &str) -> Self {
        RadioOption::new(label, false)
    }
}

impl From<(&str, bool)> for RadioOption {
    fn from((label, selected): (&str, bool)) -> Self {
        RadioOption::new(label, selected)
    }
}

/// Keep only the last selected entry.
fn normalize(options: &mut [RadioOption]) {
    if let Some(last) = options.iter().rposition(|o| o.selected) {
        for (i, option) in options.iter_mut().enumerate() {
            option.selected = i == last;
        }
    }
}

/// Exclusive selection over an ordered option set.
#[derive(Debug)]
pub struct ExclusiveGroup {
    machine: StateMachine,
    options: Vec<RadioOption>,
    hovered: Option<usize>,
    on_check_changed: Callback<usize>,
}

impl ExclusiveGroup {
    pub fn new(options: impl IntoIterator<Item = RadioOption>) -> Self {
        let mut options: Vec<RadioOption> = options.into_iter().collect();
        normalize(&mut options);
        Self {
            machine: StateMachine::new("RadioGroup"),
            options,
            hovered: None,
            on_check_changed: Callback::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.machine.current()
    }

    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the selected option.
    pub fn selected(&self) -> Option<usize> {
        self.options.iter().position(|o| o.selected)
    }

    /// Index of the option under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.machine.on_change(handler);
    }

    /// Register the selection handler. It receives the selected index.
    pub fn on_check_changed(&mut self, handler: impl FnMut(usize) + 'static) {
        self.on_check_changed.set(handler);
    }

    pub fn pointer_enter(&mut self, index: usize) {
        if index >= self.options.len() {
            debug!(index, "pointer entered unknown option");
            return;
        }
        self.hovered = Some(index);
        self.machine.transition(WidgetState::Hover);
    }

    pub fn pointer_leave(&mut self, index: usize) {
        if index >= self.options.len() {
            debug!(index, "pointer left unknown option");
            return;
        }
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        self.machine.transition(WidgetState::Idle);
    }

    /// Select `index`, deselecting every other option.
    ///
    /// Reselecting the current option notifies again. Returns `false` for an
    /// index outside the group.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            debug!(index, len = self.options.len(), "select rejected");
            return false;
        }
        for option in &mut self.options {
            option.selected = false;
        }
        self.options[index].selected = true;
        self.on_check_changed.emit(index);
        self.machine.transition(WidgetState::Pressed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Recorder;
    use pretty_assertions::assert_eq;

    fn group(options: &[(&str, bool)]) -> ExclusiveGroup {
        ExclusiveGroup::new(options.iter().copied().map(RadioOption::from))
    }

    fn selected_count(g: &ExclusiveGroup) -> usize {
        g.options().iter().filter(|o| o.selected).count()
    }

    // ── Normalization ────────────────────────────────────────────────

    #[test]
    fn last_selected_wins() {
        let g = group(&[("a", true), ("b", false), ("c", true), ("d", false)]);
        assert_eq!(g.selected(), Some(2));
        assert_eq!(selected_count(&g), 1);
    }

    #[test]
    fn none_selected_stays_none() {
        let g = group(&[("a", false), ("b", false)]);
        assert_eq!(g.selected(), None);
    }

    #[test]
    fn single_selection_kept() {
        let g = group(&[("a", false), ("b", true)]);
        assert_eq!(g.selected(), Some(1));
    }

    #[test]
    fn empty_group() {
        let mut g = group(&[]);
        assert!(g.is_empty());
        assert_eq!(g.selected(), None);
        assert!(!g.select(0));
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn select_is_exclusive() {
        let mut g = group(&[("a", true), ("b", false), ("c", false)]);
        for i in [2, 0, 1, 1, 2] {
            assert!(g.select(i));
            assert_eq!(g.selected(), Some(i));
            assert_eq!(selected_count(&g), 1);
        }
    }

    #[test]
    fn select_reports_index_then_pressed() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut g = group(&[("a", false), ("b", false)]);
        let l = log.clone();
        g.on_check_changed(move |i| l.borrow_mut().push(format!("check {i}")));
        let l = log.clone();
        g.on_state_change(move |s| l.borrow_mut().push(format!("state {s}")));

        g.select(1);
        assert_eq!(*log.borrow(), vec!["check 1", "state pressed"]);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let rec = Recorder::new();
        let mut g = group(&[("a", true)]);
        g.on_check_changed(rec.sink());
        assert!(!g.select(5));
        assert!(rec.is_empty());
        assert_eq!(g.selected(), Some(0));
        assert_eq!(g.state(), WidgetState::Idle);
    }

    // ── Hover ────────────────────────────────────────────────────────

    #[test]
    fn hover_is_per_option() {
        let mut g = group(&[("a", false), ("b", true)]);
        g.pointer_enter(0);
        assert_eq!(g.hovered(), Some(0));
        assert_eq!(g.state(), WidgetState::Hover);
        assert_eq!(g.selected(), Some(1));
        g.pointer_leave(0);
        assert_eq!(g.hovered(), None);
        assert_eq!(g.state(), WidgetState::Idle);
    }

    #[test]
    fn late_leave_of_other_option_keeps_hover_index() {
        let mut g = group(&[("a", false), ("b", false)]);
        g.pointer_enter(1);
        g.pointer_leave(0);
        assert_eq!(g.hovered(), Some(1));
    }

    #[test]
    fn unknown_option_hover_ignored() {
        let states = Recorder::new();
        let mut g = group(&[("a", false)]);
        g.on_state_change(states.sink());
        g.pointer_enter(3);
        g.pointer_leave(3);
        assert!(states.is_empty());
    }
}
