//! Host screen for the stroke timer widget.
//!
//! Configures the widget once (duration, line width, color) and drives it
//! with a press-and-hold gesture. Terminals deliver no key-release events
//! portably, so the hold key toggles: the first press engages the hold
//! (resume if paused, else start), the next press releases it (pause while
//! running). The gesture itself is exposed as [`Model::press_begin`] and
//! [`Model::press_end`].

use crate::key::Binding;
use crate::stroketimer::{self, StoppedMsg};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use std::time::Duration;

/// Key bindings for the host screen.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Toggles the press-and-hold gesture.
    pub hold: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            hold: Binding::new(vec![KeyCode::Char(' ')])
                .with_help("space")
                .with_description("press and hold the timer"),
        }
    }
}

/// The host screen model: a configured stroke timer plus gesture state.
pub struct Model {
    /// The stroke timer being driven.
    pub timer: stroketimer::Model,
    /// Key bindings in effect.
    pub keymap: KeyMap,
    holding: bool,
    finished: bool,
}

impl Model {
    /// Creates the host screen with the demo configuration: a 3-second
    /// timer, a thick blue stroke.
    pub fn new() -> Self {
        let mut timer = stroketimer::new(Duration::from_secs(3));
        timer.set_line_width(10.0);
        timer.set_color("#0A84FF");
        Self {
            timer,
            keymap: KeyMap::default(),
            holding: false,
            finished: false,
        }
    }

    /// Returns whether the hold gesture is currently engaged.
    pub fn holding(&self) -> bool {
        self.holding
    }

    /// Returns whether the last run completed on its own.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Press began: resume a paused timer, else start an idle one.
    pub fn press_begin(&mut self) -> Option<Cmd> {
        self.holding = true;
        if self.timer.paused() {
            return self.timer.resume();
        }
        if !self.timer.running() {
            self.finished = false;
            return self.timer.start();
        }
        None
    }

    /// Press ended (or was cancelled): pause while running.
    pub fn press_end(&mut self) {
        self.holding = false;
        if self.timer.running() {
            self.timer.pause();
        }
    }

    /// Routes key messages through the keymap, notes completion, and
    /// forwards everything else to the widget.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.hold.matches(key_msg) {
                if self.holding {
                    self.press_end();
                    return None;
                }
                return self.press_begin();
            }
            return None;
        }

        if let Some(stopped) = msg.downcast_ref::<StoppedMsg>() {
            if stopped.id == self.timer.id() {
                self.finished = true;
                self.holding = false;
            }
            return None;
        }

        self.timer.update(msg)
    }

    /// Renders the stroke with a status and help line underneath.
    pub fn view(&self) -> String {
        let status = if self.finished {
            "done"
        } else if self.timer.paused() {
            "paused"
        } else if self.timer.running() {
            "winding"
        } else {
            "idle"
        };

        format!(
            "{}\n\n{:>3.0}% {}\n{}: {}\n",
            self.timer.view(),
            self.timer.progress() * 100.0,
            status,
            self.keymap.hold.help,
            self.keymap.hold.description,
        )
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
