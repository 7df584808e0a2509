//! Keystroke-to-buffer editing for single-line text input.
//!
//! The caret always sits at the end of the buffer: characters are appended
//! and Backspace removes the last one. Every keystroke brackets its edit with
//! a pair of state notifications, into [`WidgetState::Updating`] and back to
//! whatever state preceded it, whether or not the edit was accepted.

use tracing::debug;

use crate::event::{Callback, Key};
use crate::widget::{StateMachine, WidgetState};

/// Text buffer, caret visibility and text subscription.
#[derive(Debug)]
pub struct TextEdit {
    machine: StateMachine,
    buffer: String,
    caret_visible: bool,
    on_text_changed: Callback<String>,
}

impl TextEdit {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("TextBox"),
            buffer: String::new(),
            caret_visible: false,
            on_text_changed: Callback::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.machine.current()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Caret position in characters. Always the buffer length.
    pub fn caret(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    pub fn on_state_change(&mut self, handler: impl FnMut(WidgetState) + 'static) {
        self.machine.on_change(handler);
    }

    /// Register the text handler. It receives the whole buffer after a change.
    pub fn on_text_changed(&mut self, handler: impl FnMut(String) + 'static) {
        self.on_text_changed.set(handler);
    }

    pub fn pointer_enter(&mut self) {
        self.caret_visible = true;
        self.machine.transition(WidgetState::Hover);
    }

    pub fn pointer_leave(&mut self) {
        self.caret_visible = false;
        self.machine.transition(WidgetState::Idle);
    }

    /// Apply one released key. Returns whether the buffer changed.
    ///
    /// `fits` is asked whether a candidate buffer still fits the field; an
    /// append it refuses is dropped.
    pub fn key_up(&mut self, key: &Key, fits: impl FnOnce(&str) -> bool) -> bool {
        let previous = self.machine.current();
        self.machine.transition(WidgetState::Updating);

        let changed = match key {
            Key::Backspace => self.buffer.pop().is_some(),
            Key::Control | Key::Shift => false,
            Key::Named(name) => {
                debug!(key = %name, "key without character ignored");
                false
            }
            Key::Char(c) => {
                let mut candidate = self.buffer.clone();
                candidate.push(*c);
                if fits(&candidate) {
                    self.buffer = candidate;
                    true
                } else {
                    debug!(key = %c, "keystroke dropped, field full");
                    false
                }
            }
        };

        if changed {
            self.on_text_changed.emit(self.buffer.clone());
        }
        self.machine.transition(previous);
        changed
    }

    /// Replace the buffer without notifying.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }
}

impl Default for TextEdit {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
