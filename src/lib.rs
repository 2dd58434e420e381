#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/stroketimer-widgets/")]

//! # stroketimer-widgets
//!
//! An animated "stroke timer" widget for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs): a rectangular
//! outline that winds from 0% to 100% over a configurable duration, with
//! start/pause/resume/stop lifecycle hooks and a host screen that drives it
//! with a press-and-hold gesture.
//!
//! ## Overview
//!
//! The widget follows the Elm Architecture pattern used across the
//! bubbletea-rs ecosystem: an `update()` method that consumes messages and
//! returns commands, and a `view()` method that renders a string frame. The
//! animation is driven by a repeating 10ms tick scheduled through the
//! runtime, so a single-threaded event loop is all it needs.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `StrokeTimer` | The timer state machine plus its animated outline |
//! | `Stroke` | The drawable outline path (bounds, direction, glyphs, color) |
//! | `HostScreen` | Demo screen wiring a press-and-hold gesture to the timer |
//!
//! ## Quick Start
//!
//! ```rust
//! use stroketimer_widgets::prelude::*;
//! use std::time::Duration;
//!
//! let mut timer = stroketimer_new(Duration::from_secs(3));
//! timer.set_color("#5A56E0");
//! timer.set_bounds(24, 7);
//!
//! let cmd = timer.start();
//! assert!(cmd.is_some());
//! assert!(timer.running());
//!
//! // Each frame is a width × height character grid.
//! assert_eq!(timer.view().lines().count(), 7);
//! ```
//!
//! ## Lifecycle hooks
//!
//! The original control's delegate surface is split into two capability
//! traits: [`Observer`](stroketimer::Observer) for the will/did lifecycle
//! notifications and the per-tick progress callback, and
//! [`Gate`](stroketimer::Gate) for the boolean predicates that can silently
//! veto a transition. Both have full default implementations.

pub mod host;
pub mod key;
pub mod stroke;
pub mod stroketimer;

pub use host::{KeyMap as HostKeyMap, Model as HostScreen};
pub use key::Binding;
pub use stroke::{GlyphSet, Stroke, ASCII, DOUBLE, HEAVY, LIGHT};
pub use stroketimer::{
    new as stroketimer_new, new_with_interval as stroketimer_new_with_interval, Gate,
    Model as StrokeTimer, Observer, StoppedMsg, TickMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use stroketimer_widgets::prelude::*;
/// use std::time::Duration;
///
/// let timer = stroketimer_new(Duration::from_secs(30));
/// assert!(!timer.running());
/// ```
pub mod prelude {
    pub use crate::host::{KeyMap as HostKeyMap, Model as HostScreen};
    pub use crate::key::Binding;
    pub use crate::stroke::{GlyphSet, Stroke, ASCII, DOUBLE, HEAVY, LIGHT};
    pub use crate::stroketimer::{
        new as stroketimer_new, new_with_interval as stroketimer_new_with_interval, Gate,
        Model as StrokeTimer, Observer, StoppedMsg, TickMsg,
    };
}
