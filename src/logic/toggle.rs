//! Checked/unchecked toggle for check boxes.
//!
//! The check state and the widget state are independent channels: clicks
//! flip the check state and notify `on_check_changed`; pointer enter/leave
//! drive the widget state and notify `on_state_change`.

use std::fmt;

use crate::event::Callback;
use crate::widget::{StateMachine, WidgetState};

/// Binary check state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
}

impl CheckState {
    /// The opposite state.
    pub fn toggled(self) -> CheckState {
        match self {
            CheckState::Unchecked => CheckState::Checked,
            CheckState::Checked => CheckState::Unchecked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckState::Unchecked => "unchecked",
            CheckState::Checked => "checked",
        })
    }
}

/// Toggle state with its two subscriptions.
#[derive(Debug)]
pub struct ToggleLogic {
    machine: StateMachine,
    check: CheckState,
    on_check_changed: Callback<CheckState>,
}

impl ToggleLogic {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("CheckBox"),
            check: CheckState::Unchecked,
            on_check_changed: Callback::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.machine.current()
    }

    pub fn check_state(&self) -> CheckState {
        self.check
    }

    pub fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.machine.on_change(handler);
    }

    pub fn on_check_changed(&mut self, handler: impl FnMut(CheckState) + 'static) {
        self.on_check_changed.set(handler);
    }

    pub fn pointer_enter(&mut self) {
        self.machine.transition(WidgetState::Hover);
    }

    pub fn pointer_leave(&mut self) {
        self.machine.transition(WidgetState::Idle);
    }

    /// Flip the check state and report the new one.
    pub fn click(&mut self) -> CheckState {
        self.check = self.check.toggled();
        self.on_check_changed.emit(self.check);
        self.check
    }

    /// Set the check state without notifying.
    pub fn set_check_state(&mut self, check: CheckState) {
        self.check = check;
    }
}

impl Default for ToggleLogic {
    fn default() -> Self {
        Self::new()
    }
}
