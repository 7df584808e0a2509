//! Widget interaction logic, independent of any shapes.
//!
//! Each type here owns a [`StateMachine`](crate::widget::StateMachine) and
//! the subscriptions of one widget kind. The facades in
//! [`widgets`](crate::widgets) wire them to shapes and paint the result.

pub mod button;
pub mod drag;
pub mod exclusive;
pub mod text_edit;
pub mod toggle;
pub mod value;

pub use button::ButtonLogic;
pub use drag::{Direction, DragThumb, THUMB_DIVISOR};
pub use exclusive::{ExclusiveGroup, RadioOption};
pub use text_edit::TextEdit;
pub use toggle::{CheckState, ToggleLogic};
pub use value::{PercentTrack, MAX_PERCENT};
