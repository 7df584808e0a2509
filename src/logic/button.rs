//! Press/release/click disambiguation for push buttons.
//!
//! A click is recognized only when a pointer-down and the following
//! pointer-up both land on the button. A release without a preceding press
//! (the pointer was pressed elsewhere and dragged in) just returns to hover.

use tracing::trace;

use crate::event::{Callback, InputEvent, PointerEvent};
use crate::widget::{StateMachine, WidgetState};

/// Button interaction state and click subscription.
#[derive(Debug)]
pub struct ButtonLogic {
    machine: StateMachine,
    on_click: Callback<PointerEvent>,
}

impl ButtonLogic {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("Button"),
            on_click: Callback::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.machine.current()
    }

    pub fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.machine.on_change(handler);
    }

    /// Register the click handler. It receives the pointer-up event.
    pub fn on_click(&mut self, handler: impl FnMut(PointerEvent) + 'static) {
        self.on_click.set(handler);
    }

    pub fn pointer_enter(&mut self) {
        self.machine.transition(WidgetState::Hover);
    }

    pub fn pointer_leave(&mut self) {
        self.machine.transition(WidgetState::Idle);
    }

    pub fn pointer_down(&mut self) {
        self.machine.transition(WidgetState::Pressed);
    }

    /// Release over the button. Returns whether a click was recognized.
    pub fn pointer_up(&mut self, event: PointerEvent) -> bool {
        if self.machine.current() == WidgetState::Pressed {
            self.machine.transition(WidgetState::Executing);
            self.on_click.emit(event);
            self.machine.transition(WidgetState::Hover);
            true
        } else {
            trace!(state = %self.machine.current(), "release without press");
            self.machine.transition(WidgetState::Hover);
            false
        }
    }

    /// Route a raw input event. Events a button does not react to are ignored.
    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerEnter(_) => self.pointer_enter(),
            InputEvent::PointerLeave(_) => self.pointer_leave(),
            InputEvent::PointerDown(_) => self.pointer_down(),
            InputEvent::PointerUp(p) => {
                self.pointer_up(*p);
            }
            InputEvent::PointerMove(_) | InputEvent::Click(_) | InputEvent::KeyUp(_) => {}
        }
    }
}

impl Default for ButtonLogic {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
