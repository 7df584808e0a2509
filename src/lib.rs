//! # widget-engine
//!
//! A headless interaction engine for pointer and keyboard driven widgets.
//!
//! Every widget owns a small state machine fed by discrete input events and
//! reports changes through single-subscriber callbacks. Drawing is delegated
//! to a [`Renderer`](shape::Renderer) through opaque shape handles; the
//! engine issues commands and reads back nothing but shape extents.
//!
//! ## Core Systems
//!
//! - **[`widget`]**: interaction states, the state machine, the `Widget` trait
//! - **[`logic`]**: per-widget behavior: click gating, toggling, exclusive
//!   selection, thumb dragging, text editing, percentage arithmetic
//! - **[`widgets`]**: facades: Button, CheckBox, RadioGroup, ScrollBar,
//!   ProgressBar, Slider, TextBox
//! - **[`event`]**: input events, keys, callbacks, crossterm conversion
//! - **[`shape`]**: renderer contract and the in-memory [`Scene`](shape::Scene)
//! - **[`theme`]**: colors and metrics, parsed from a CSS-like block
//! - **[`testing`]**: headless pilot and callback recorder
//! - **[`geometry`]**: Offset and Size primitives
//!
//! ## Example
//!
//! ```
//! use widget_engine::shape::Scene;
//! use widget_engine::testing::{Pilot, Recorder};
//! use widget_engine::theme::Theme;
//! use widget_engine::widget::Widget;
//! use widget_engine::widgets::{SliderPart, Slider};
//!
//! let mut scene = Scene::new();
//! let mut slider = Slider::new(&mut scene, &Theme::default(), 200.0, 3)?;
//! let ticks = Recorder::new();
//! slider.on_tick_changed(ticks.sink());
//! slider.move_to(10.0, 10.0);
//!
//! let mut pilot = Pilot::new(slider);
//! pilot.click(SliderPart::Tick(2));
//! assert_eq!(ticks.take(), vec![2]);
//! assert_eq!(pilot.widget().value(), 100.0);
//! # Ok::<(), widget_engine::error::WidgetError>(())
//! ```

// Foundation
pub mod error;
pub mod geometry;
pub mod theme;

// Input and drawing
pub mod event;
pub mod shape;

// Widget system
pub mod logic;
pub mod widget;
pub mod widgets;

// Test support
pub mod testing;

pub use error::WidgetError;
