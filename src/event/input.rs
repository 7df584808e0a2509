//! Input event types delivered by the host's input source.
//!
//! Defines [`InputEvent`], [`PointerEvent`] and [`Key`]. Crossterm events are
//! converted via [`InputEvent::from_crossterm`] and `From` impls so the widget
//! logic never depends on crossterm directly.

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A released keyboard key.
///
/// Only the keys the text edit logic distinguishes get their own variant.
/// Everything else that produces a character is [`Key::Char`]; keys without a
/// character (arrows, Enter, function keys) and Control chords are
/// [`Key::Named`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Control,
    Shift,
    Named(String),
}

impl Key {
    /// Map a DOM-style key name (`"a"`, `"Backspace"`, `"Shift"`, `"Enter"`).
    pub fn from_name(name: &str) -> Key {
        match name {
            "Backspace" => Key::Backspace,
            "Control" => Key::Control,
            "Shift" => Key::Shift,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Named(name.to_string()),
                }
            }
        }
    }

    /// The character this key appends, if any.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Key::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}

// ---------------------------------------------------------------------------
// PointerEvent / InputEvent
// ---------------------------------------------------------------------------

/// Pointer position in scene coordinates at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A discrete event from the input source.
///
/// The originating shape is not part of the event; widgets receive it as the
/// `part` argument of [`Widget::handle_event`](crate::widget::Widget::handle_event).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerEnter(PointerEvent),
    PointerLeave(PointerEvent),
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerMove(PointerEvent),
    Click(PointerEvent),
    KeyUp(Key),
}

impl InputEvent {
    /// Event name as the input source spells it.
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::PointerEnter(_) => "pointerEnter",
            InputEvent::PointerLeave(_) => "pointerLeave",
            InputEvent::PointerDown(_) => "pointerDown",
            InputEvent::PointerUp(_) => "pointerUp",
            InputEvent::PointerMove(_) => "pointerMove",
            InputEvent::Click(_) => "click",
            InputEvent::KeyUp(_) => "keyUp",
        }
    }

    /// The pointer payload, for pointer events.
    pub fn pointer(&self) -> Option<PointerEvent> {
        match self {
            InputEvent::PointerEnter(p)
            | InputEvent::PointerLeave(p)
            | InputEvent::PointerDown(p)
            | InputEvent::PointerUp(p)
            | InputEvent::PointerMove(p)
            | InputEvent::Click(p) => Some(*p),
            InputEvent::KeyUp(_) => None,
        }
    }

    /// Convert a crossterm event.
    ///
    /// Terminals only report key releases with the keyboard enhancement flags
    /// enabled, so presses stand in for key-up and releases are dropped to
    /// avoid double delivery. Mouse cells become pointer coordinates; scroll
    /// wheel, resize, focus and paste events have no counterpart.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<InputEvent> {
        use crossterm::event::{Event, KeyEventKind, MouseEventKind};

        match event {
            Event::Key(ke) => match ke.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    Some(InputEvent::KeyUp(Key::from(*ke)))
                }
                KeyEventKind::Release => None,
            },
            Event::Mouse(me) => {
                let pointer = PointerEvent::new(me.column as f64, me.row as f64);
                match me.kind {
                    MouseEventKind::Down(_) => Some(InputEvent::PointerDown(pointer)),
                    MouseEventKind::Up(_) => Some(InputEvent::PointerUp(pointer)),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        Some(InputEvent::PointerMove(pointer))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

impl From<crossterm::event::KeyEvent> for Key {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyModifiers, ModifierKeyCode};

        match ct.code {
            // A chord such as Ctrl+A is a command, not text.
            KeyCode::Char(c) if ct.modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Named(format!("Ctrl+{c}"))
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                Key::Shift
            }
            KeyCode::Modifier(ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl) => {
                Key::Control
            }
            other => Key::Named(format!("{other:?}")),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
