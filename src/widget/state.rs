//! Interaction state shared by every widget.
//!
//! [`StateMachine`] holds the current [`WidgetState`] and the single
//! state-change subscriber. There is no transition graph: any state may
//! follow any other, and transitioning into the current state still notifies
//! the subscriber. Drag updates rely on that to pulse `Updating`.

use std::fmt;

use tracing::trace;

use crate::event::Callback;

// ---------------------------------------------------------------------------
// WidgetState
// ---------------------------------------------------------------------------

/// Visual/interaction status of a widget, distinct from its domain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Hover,
    Pressed,
    Executing,
    Updating,
}

impl WidgetState {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetState::Idle => "idle",
            WidgetState::Hover => "hover",
            WidgetState::Pressed => "pressed",
            WidgetState::Executing => "executing",
            WidgetState::Updating => "updating",
        }
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StateMachine
// ---------------------------------------------------------------------------

/// Current state plus its change subscription.
#[derive(Debug)]
pub struct StateMachine {
    /// Widget type name, for log output only.
    owner: &'static str,
    current: WidgetState,
    on_change: Callback<WidgetState>,
}

impl StateMachine {
    /// Start in [`WidgetState::Idle`] with no subscriber.
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            current: WidgetState::Idle,
            on_change: Callback::new(),
        }
    }

    pub fn current(&self) -> WidgetState {
        self.current
    }

    /// Register the state-change subscriber, replacing any previous one.
    pub fn on_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.on_change.set(handler);
    }

    /// Enter `to` and notify the subscriber, even if `to` is the current state.
    pub fn transition(&mut self, to: WidgetState) {
        trace!(widget = self.owner, from = %self.current, %to, "transition");
        self.current = to;
        self.on_change.emit(to);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
