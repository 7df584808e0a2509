//! Widget system: interaction states and the shared widget trait.

pub mod state;
pub mod traits;

pub use state::{StateMachine, WidgetState};
pub use traits::Widget;
