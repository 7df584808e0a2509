//! Headless testing helpers: widget pilot and callback recorder.
//!
//! Use the [`Pilot`] to drive a widget with synthetic input and a
//! [`Recorder`] to capture what its callbacks report. Pair them with a
//! [`Scene`](crate::shape::Scene) to inspect what the widget drew.

pub mod pilot;
pub mod recorder;

pub use pilot::Pilot;
pub use recorder::Recorder;
