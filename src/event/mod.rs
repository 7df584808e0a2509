//! Event system: raw input, keys, and single-subscriber callbacks.

pub mod callback;
pub mod input;

pub use callback::Callback;
pub use input::{InputEvent, Key, PointerEvent};
