//! Single-subscriber callback slot.
//!
//! Every widget notification (state change, click, check change, ...) is held
//! in a [`Callback`]. A slot holds at most one handler; subscribing again
//! replaces the previous handler rather than adding a second one.

use std::fmt;

/// An optional, replaceable handler for events carrying a `T`.
pub struct Callback<T> {
    handler: Option<Box<dyn FnMut(T)>>,
}

impl<T> Callback<T> {
    /// An empty slot.
    pub fn new() -> Self {
        Self { handler: None }
    }

    /// Install `handler`, dropping whatever was registered before.
    pub fn set(&mut self, handler: impl FnMut(T) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Remove the registered handler, if any.
    pub fn clear(&mut self) {
        self.handler = None;
    }

    /// Whether a handler is registered.
    pub fn is_set(&self) -> bool {
        self.handler.is_some()
    }

    /// Invoke the handler with `value`. Returns `false` when the slot is empty.
    pub fn emit(&mut self, value: T) -> bool {
        match self.handler.as_mut() {
            Some(handler) => {
                handler(value);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_set())
            .finish()
    }
}
