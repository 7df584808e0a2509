//! Built-in widgets: Button, CheckBox, RadioGroup, ScrollBar, ProgressBar,
//! Slider, TextBox.
//!
//! Each facade pairs one logic type from [`logic`](crate::logic) with the
//! shapes it draws through, and repaints those shapes after every event it
//! handles.

pub mod button;
pub mod checkbox;
pub mod progress;
pub mod radio;
pub mod scrollbar;
pub mod slider;
pub mod text_box;

pub use button::Button;
pub use checkbox::CheckBox;
pub use progress::{Incremented, ProgressBar};
pub use radio::RadioGroup;
pub use scrollbar::{ScrollBar, ScrollPart};
pub use slider::{Slider, SliderPart};
pub use text_box::TextBox;

use crate::theme::{Color, Theme};
use crate::widget::WidgetState;

/// Fill of an interactive shape in `state`.
pub(crate) fn state_fill(theme: &Theme, state: WidgetState) -> Color {
    match state {
        WidgetState::Idle => theme.idle,
        WidgetState::Hover => theme.hover,
        WidgetState::Pressed | WidgetState::Executing | WidgetState::Updating => theme.pressed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_follow_state() {
        let theme = Theme::default();
        assert_eq!(state_fill(&theme, WidgetState::Idle), Color::RED);
        assert_eq!(state_fill(&theme, WidgetState::Hover), Color::BLUE);
        assert_eq!(state_fill(&theme, WidgetState::Updating), theme.pressed);
    }
}
