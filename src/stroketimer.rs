//! Stroke timer component for Bubble Tea applications.
//!
//! The stroke timer draws an animated rectangular outline that fills (or
//! unwinds) over a configurable duration, driven by a repeating 10ms tick.
//! It exposes the full lifecycle of the original control: `start`, `pause`,
//! `resume` and `stop`, each with will/did observer hooks and an optional
//! should-gate that can silently veto the transition.
//!
//! # Basic Usage
//!
//! ```rust
//! use stroketimer_widgets::stroketimer::{new, new_with_interval};
//! use std::time::Duration;
//!
//! // A 3-second timer with the default 10ms tick.
//! let mut timer = new(Duration::from_secs(3));
//! let cmd = timer.start();
//! assert!(cmd.is_some());
//! assert!(timer.running());
//!
//! // A coarser tick for battery-friendly updates.
//! let timer = new_with_interval(Duration::from_secs(30), Duration::from_millis(100));
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use stroketimer_widgets::stroketimer::{new, Model, StoppedMsg};
//! use std::time::Duration;
//!
//! struct MyApp {
//!     timer: Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = new(Duration::from_secs(10));
//!         let cmd = timer.start();
//!         (Self { timer }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(stopped) = msg.downcast_ref::<StoppedMsg>() {
//!             if stopped.id == self.timer.id() {
//!                 // The outline reached 100% and the timer reset itself.
//!             }
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! # Observers and Gates
//!
//! ```rust
//! use stroketimer_widgets::stroketimer::{new, Gate, Observer};
//! use std::time::Duration;
//!
//! struct Announcer;
//! impl Observer for Announcer {
//!     fn did_start(&mut self) { /* play a sound, update a status line */ }
//!     fn did_advance(&mut self, progress: f64) {
//!         let _ = progress; // fraction in [0, 1]
//!     }
//! }
//!
//! struct Unpausable;
//! impl Gate for Unpausable {
//!     fn should_pause(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let mut timer = new(Duration::from_secs(5))
//!     .with_observer(Box::new(Announcer))
//!     .with_gate(Box::new(Unpausable));
//! timer.start();
//! timer.pause(); // vetoed, still running
//! assert!(timer.running());
//! ```

use crate::stroke::Stroke;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for timer instances so that multiple stroke
/// timers can coexist without processing each other's tick messages.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation length substituted when the configured duration is zero.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// The repeating tick interval used by [`new`].
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Message sent on every timer tick to accumulate elapsed time.
///
/// Ticks carry the id of the timer that scheduled them plus an internal tag;
/// stale ticks left over from before a pause or stop fail the tag check and
/// are dropped, which is how pending callbacks get cancelled.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The unique identifier of the timer that generated this tick.
    pub id: i64,
    /// Internal synchronization tag; a mismatch means the tick is stale.
    tag: i64,
}

/// Message sent when the timer reaches 100% and stops itself.
///
/// The stop has already happened by the time this message is observed: the
/// widget is Idle and its elapsed time is back to zero. This is the
/// host-facing completion notification, alongside the `did_stop` hook.
#[derive(Debug, Clone)]
pub struct StoppedMsg {
    /// The unique identifier of the timer that completed.
    pub id: i64,
}

/// Lifecycle observer for the stroke timer.
///
/// Every method has a no-op default, so implementers only override the hooks
/// they care about. `will_*` hooks fire before the state mutates, `did_*`
/// after. `did_advance` fires on each tick that moves the stroke, with the
/// clamped completion fraction.
///
/// Observers must be `Send`: the widget lives inside a `bubbletea_rs::Model`,
/// which the runtime moves across threads.
pub trait Observer: Send {
    /// Called before the timer transitions to Running.
    fn will_start(&mut self) {}
    /// Called after the timer has started.
    fn did_start(&mut self) {}
    /// Called before the timer freezes.
    fn will_pause(&mut self) {}
    /// Called after the timer has paused.
    fn did_pause(&mut self) {}
    /// Called before a paused timer continues.
    fn will_resume(&mut self) {}
    /// Called after the timer has resumed.
    fn did_resume(&mut self) {}
    /// Called before the timer resets, manually or at completion.
    fn will_stop(&mut self) {}
    /// Called after the timer has reset.
    fn did_stop(&mut self) {}
    /// Called on each tick with the completion fraction in `[0, 1]`.
    fn did_advance(&mut self, progress: f64) {
        let _ = progress;
    }
}

/// Gating predicates for the stroke timer.
///
/// Each predicate defaults to allowing the transition. Returning `false`
/// silently vetoes it: no state changes and no observer hooks fire.
///
/// Gates must be `Send`, like [`Observer`]s.
pub trait Gate: Send {
    /// Whether a `start()` call may proceed.
    fn should_start(&self) -> bool {
        true
    }
    /// Whether a `pause()` call may proceed.
    fn should_pause(&self) -> bool {
        true
    }
    /// Whether a `resume()` call may proceed.
    fn should_resume(&self) -> bool {
        true
    }
}

/// The stroke timer widget.
///
/// Owns the timer state machine (Idle, Running, Paused), the elapsed-time
/// bookkeeping and the drawable [`Stroke`]. The two state flags are never
/// both set: Running is `running && !paused`, Paused is `paused && !running`,
/// Idle is neither.
pub struct Model {
    /// Total animation duration. Zero animates over [`DEFAULT_DURATION`].
    pub duration: Duration,
    /// Elapsed-time accumulation step for the repeating tick.
    pub interval: Duration,
    elapsed: Duration,
    running: bool,
    paused: bool,
    unwinds: bool,
    stroke: Stroke,
    observer: Option<Box<dyn Observer>>,
    gate: Option<Box<dyn Gate>>,
    id: i64,
    tag: i64,
}

/// Creates a stroke timer with the given duration and the default 10ms tick.
pub fn new(duration: Duration) -> Model {
    new_with_interval(duration, DEFAULT_INTERVAL)
}

/// Creates a stroke timer with a custom tick interval.
///
/// # Examples
///
/// ```rust
/// use stroketimer_widgets::stroketimer::new_with_interval;
/// use std::time::Duration;
///
/// let timer = new_with_interval(Duration::from_secs(60), Duration::from_millis(50));
/// assert_eq!(timer.interval, Duration::from_millis(50));
/// assert!(!timer.running());
/// ```
pub fn new_with_interval(duration: Duration, interval: Duration) -> Model {
    let mut stroke = Stroke::default();
    stroke.set_line_width(DEFAULT_LINE_WIDTH);
    Model {
        duration,
        interval,
        elapsed: Duration::ZERO,
        running: false,
        paused: false,
        unwinds: false,
        stroke,
        observer: None,
        gate: None,
        id: next_id(),
        tag: 0,
    }
}

impl Model {
    /// Returns the unique identifier of this timer instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns whether the timer is actively accumulating time.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Returns whether the timer is frozen mid-animation.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Returns the accumulated elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns whether the animation depletes from full instead of filling.
    pub fn unwinds(&self) -> bool {
        self.unwinds
    }

    /// Installs a lifecycle observer, builder style.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Installs a transition gate, builder style.
    pub fn with_gate(mut self, gate: Box<dyn Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Replaces (or clears) the lifecycle observer.
    pub fn set_observer(&mut self, observer: Option<Box<dyn Observer>>) {
        self.observer = observer;
    }

    /// Replaces (or clears) the transition gate.
    pub fn set_gate(&mut self, gate: Option<Box<dyn Gate>>) {
        self.gate = gate;
    }

    /// Read access to the drawable stroke.
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Returns the stroke line width.
    pub fn line_width(&self) -> f64 {
        self.stroke.line_width()
    }

    /// Sets the stroke line width; the rendered shape updates immediately.
    pub fn set_line_width(&mut self, line_width: f64) {
        self.stroke.set_line_width(line_width);
    }

    /// Returns the stroke color, or an empty string when unset.
    pub fn color(&self) -> &str {
        self.stroke.color()
    }

    /// Sets the stroke color; the rendered shape updates immediately.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.stroke.set_color(color);
    }

    /// Returns whether the stroke winds clockwise.
    pub fn clockwise(&self) -> bool {
        self.stroke.clockwise()
    }

    /// Sets the winding direction; the path is rebuilt immediately.
    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.stroke.set_clockwise(clockwise);
    }

    /// Resizes the stroke bounds in cells; the path is rebuilt immediately.
    pub fn set_bounds(&mut self, width: usize, height: usize) {
        self.stroke.set_bounds(width, height);
    }

    /// Switches between filling (0→1) and depleting (1→0) animation.
    ///
    /// Toggling moves the idle stroke endpoint immediately but never touches
    /// the duration or the accumulated elapsed time.
    pub fn set_unwinds(&mut self, unwinds: bool) {
        if unwinds == self.unwinds {
            return;
        }
        self.unwinds = unwinds;
        self.stroke.set_end(if unwinds { 1.0 } else { 0.0 });
    }

    /// Returns the current rendered position of the animated stroke endpoint.
    pub fn progress(&self) -> f64 {
        if self.unwinds {
            self.stroke.start()
        } else {
            self.stroke.end()
        }
    }

    /// Moves the animated stroke endpoint directly, clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f64) {
        let progress = progress.clamp(0.0, 1.0);
        if self.unwinds {
            self.stroke.set_start(progress);
        } else {
            self.stroke.set_end(progress);
        }
    }

    /// The duration the animation actually runs over.
    fn effective_duration(&self) -> Duration {
        if self.duration.is_zero() {
            DEFAULT_DURATION
        } else {
            self.duration
        }
    }

    /// Completion fraction in `[0, 1]`, derived from elapsed time.
    ///
    /// Pure: the single authoritative completion check lives in the tick
    /// handler, which stops the timer when this reaches 1.
    pub fn completion(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.effective_duration().as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Starts the timer from Idle.
    ///
    /// No-op (returning `None`) when the timer is already running or paused,
    /// or when the gate's `should_start` vetoes. Otherwise fires
    /// `will_start`, transitions to Running with the stroke reset for the
    /// configured direction, fires `did_start` and returns the first tick
    /// command.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running || self.paused {
            return None;
        }
        if !self.allowed(|gate| gate.should_start()) {
            return None;
        }

        self.notify(|observer| observer.will_start());

        self.running = true;
        self.paused = false;
        self.stroke.set_start(0.0);
        self.stroke.set_end(if self.unwinds { 1.0 } else { 0.0 });
        self.tag += 1;

        self.notify(|observer| observer.did_start());
        Some(self.tick())
    }

    /// Freezes a running timer at its current offset.
    ///
    /// No-op unless Running, or when `should_pause` vetoes. The elapsed time
    /// and stroke position are preserved; pending ticks become stale.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        if !self.allowed(|gate| gate.should_pause()) {
            return;
        }

        self.notify(|observer| observer.will_pause());

        self.paused = true;
        self.running = false;
        self.tag += 1;

        self.notify(|observer| observer.did_pause());
    }

    /// Continues a paused timer, preserving the elapsed offset.
    ///
    /// No-op (returning `None`) unless Paused, or when `should_resume`
    /// vetoes. Returns a fresh tick command on success.
    pub fn resume(&mut self) -> Option<Cmd> {
        if !self.paused {
            return None;
        }
        if !self.allowed(|gate| gate.should_resume()) {
            return None;
        }

        self.notify(|observer| observer.will_resume());

        self.paused = false;
        self.running = true;
        self.tag += 1;

        self.notify(|observer| observer.did_resume());
        Some(self.tick())
    }

    /// Stops the timer and resets the elapsed time to zero.
    ///
    /// Always runs, from any state, and always fires `will_stop`/`did_stop`.
    /// Invoked automatically when the completion fraction reaches 1. Pending
    /// ticks are cancelled by tag invalidation.
    pub fn stop(&mut self) {
        self.notify(|observer| observer.will_stop());

        self.running = false;
        self.paused = false;
        self.elapsed = Duration::ZERO;
        self.tag += 1;

        self.notify(|observer| observer.did_stop());
    }

    fn allowed(&self, check: impl FnOnce(&dyn Gate) -> bool) -> bool {
        self.gate.as_deref().map_or(true, check)
    }

    fn notify(&mut self, hook: impl FnOnce(&mut dyn Observer)) {
        if let Some(observer) = self.observer.as_deref_mut() {
            hook(observer);
        }
    }

    /// Schedules the next tick for this timer.
    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = self.interval;

        bubbletea_tick(interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Emits the completion notification after an automatic stop.
    fn stopped(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StoppedMsg { id }) as Msg
        })
    }

    /// Processes messages and advances the timer state.
    ///
    /// Handles [`TickMsg`] with id and tag filtering: ticks for other timers
    /// or from before the last transition are dropped, as are ticks arriving
    /// while not Running. A valid tick accumulates one interval of elapsed
    /// time, recomputes the completion fraction and either stops the timer
    /// (at 1, returning a [`StoppedMsg`] command) or moves the stroke,
    /// notifies `did_advance` and schedules the next tick.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if !self.running || (tick_msg.id != 0 && tick_msg.id != self.id) {
                return None;
            }

            // If a tag is set, and it's not the one we expect, reject the
            // message. This prevents the timer from receiving too many
            // messages and thus ticking too fast.
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return None;
            }

            self.elapsed = (self.elapsed + self.interval).min(self.effective_duration());
            let fraction = self.completion();

            if fraction >= 1.0 {
                // The final frame renders complete; stop() only resets the
                // elapsed time, not the stroke position.
                if self.unwinds {
                    self.stroke.set_start(1.0);
                } else {
                    self.stroke.set_end(1.0);
                }
                self.stop();
                return Some(self.stopped());
            }

            if self.unwinds {
                self.stroke.set_start(fraction);
            } else {
                self.stroke.set_end(fraction);
            }
            self.notify(|observer| observer.did_advance(fraction));

            self.tag += 1;
            return Some(self.tick());
        }

        None
    }

    /// Renders the stroke at its current position.
    pub fn view(&self) -> String {
        self.stroke.render()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("duration", &self.duration)
            .field("interval", &self.interval)
            .field("elapsed", &self.elapsed)
            .field("running", &self.running)
            .field("paused", &self.paused)
            .field("unwinds", &self.unwinds)
            .field("id", &self.id)
            .finish()
    }
}

impl BubbleTeaModel for Model {
    /// Creates a stroke timer with the 5-second default duration and starts
    /// it immediately, for standalone use.
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(DEFAULT_DURATION);
        let cmd = model.start();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    /// Equivalent to `new(DEFAULT_DURATION)`: a 5-second timer, not yet
    /// started.
    fn default() -> Self {
        new(DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<&'static str>>>,
        advances: Arc<Mutex<Vec<f64>>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().clone()
        }

        fn count(&self, event: &str) -> usize {
            self.events().iter().filter(|e| **e == event).count()
        }

        fn advances(&self) -> Vec<f64> {
            self.advances.lock().unwrap().clone()
        }
    }

    impl Observer for Recorder {
        fn will_start(&mut self) {
            self.events.lock().unwrap().push("will_start");
        }
        fn did_start(&mut self) {
            self.events.lock().unwrap().push("did_start");
        }
        fn will_pause(&mut self) {
            self.events.lock().unwrap().push("will_pause");
        }
        fn did_pause(&mut self) {
            self.events.lock().unwrap().push("did_pause");
        }
        fn will_resume(&mut self) {
            self.events.lock().unwrap().push("will_resume");
        }
        fn did_resume(&mut self) {
            self.events.lock().unwrap().push("did_resume");
        }
        fn will_stop(&mut self) {
            self.events.lock().unwrap().push("will_stop");
        }
        fn did_stop(&mut self) {
            self.events.lock().unwrap().push("did_stop");
        }
        fn did_advance(&mut self, progress: f64) {
            self.advances.lock().unwrap().push(progress);
        }
    }

    struct Refusal;

    impl Gate for Refusal {
        fn should_start(&self) -> bool {
            false
        }
        fn should_pause(&self) -> bool {
            false
        }
        fn should_resume(&self) -> bool {
            false
        }
    }

    fn tick_once(timer: &mut Model) -> Option<Cmd> {
        let msg = TickMsg {
            id: timer.id,
            tag: timer.tag,
        };
        timer.update(Box::new(msg))
    }

    #[test]
    fn test_new_defaults() {
        let timer = new(Duration::from_secs(3));
        assert_eq!(timer.duration, Duration::from_secs(3));
        assert_eq!(timer.interval, DEFAULT_INTERVAL);
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(timer.id() > 0);
        assert!(!timer.running());
        assert!(!timer.paused());
        assert!(!timer.unwinds());
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_unique_ids() {
        let timer1 = new(Duration::from_secs(1));
        let timer2 = new(Duration::from_secs(1));
        assert_ne!(timer1.id(), timer2.id());
    }

    #[test]
    fn test_start_transitions_to_running() {
        let mut timer = new(Duration::from_secs(3));
        let cmd = timer.start();
        assert!(cmd.is_some());
        assert!(timer.running());
        assert!(!timer.paused());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let recorder = Recorder::default();
        let mut timer =
            new(Duration::from_secs(3)).with_observer(Box::new(recorder.clone()));
        timer.start();
        assert!(timer.start().is_none());
        assert_eq!(recorder.count("will_start"), 1);
    }

    #[test]
    fn test_full_run_reaches_one_and_goes_idle() {
        // duration=3s, tick=10ms: after 300 ticks the widget is Idle and
        // did_stop has fired exactly once.
        let recorder = Recorder::default();
        let mut timer =
            new(Duration::from_secs(3)).with_observer(Box::new(recorder.clone()));
        timer.start();

        for _ in 0..299 {
            assert!(tick_once(&mut timer).is_some());
            assert!(timer.running());
        }
        assert_eq!(recorder.advances().len(), 299);

        // The 300th tick hits completion 1.0 and auto-stops, leaving the
        // stroke rendered complete.
        let cmd = tick_once(&mut timer);
        assert!(cmd.is_some()); // StoppedMsg command
        assert!(!timer.running());
        assert!(!timer.paused());
        assert_eq!(timer.progress(), 1.0);
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(recorder.count("did_stop"), 1);

        // Stale ticks after the stop are rejected.
        assert!(tick_once(&mut timer).is_none());
    }

    #[test]
    fn test_ticks_advance_progress_monotonically() {
        let mut timer = new(Duration::from_secs(1));
        timer.start();

        let mut last = timer.progress();
        for _ in 0..50 {
            tick_once(&mut timer);
            assert!(timer.progress() >= last);
            last = timer.progress();
        }
        assert!((timer.progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_pause_then_resume_preserves_elapsed() {
        let mut timer = new(Duration::from_secs(3));
        timer.start();
        for _ in 0..10 {
            tick_once(&mut timer);
        }
        let elapsed = timer.elapsed();
        let progress = timer.progress();

        timer.pause();
        assert!(timer.paused());
        assert!(!timer.running());
        assert_eq!(timer.elapsed(), elapsed);

        let cmd = timer.resume();
        assert!(cmd.is_some());
        assert!(timer.running());
        assert!(!timer.paused());
        assert_eq!(timer.elapsed(), elapsed);
        assert_eq!(timer.progress(), progress);
    }

    #[test]
    fn test_paused_timer_rejects_ticks() {
        let mut timer = new(Duration::from_secs(3));
        timer.start();
        tick_once(&mut timer);
        timer.pause();

        let elapsed = timer.elapsed();
        assert!(tick_once(&mut timer).is_none());
        assert_eq!(timer.elapsed(), elapsed);
    }

    #[test]
    fn test_pause_when_idle_is_noop() {
        let recorder = Recorder::default();
        let mut timer =
            new(Duration::from_secs(3)).with_observer(Box::new(recorder.clone()));

        timer.pause();
        assert!(!timer.paused());
        assert!(!timer.running());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_resume_when_not_paused_is_noop() {
        let recorder = Recorder::default();
        let mut timer =
            new(Duration::from_secs(3)).with_observer(Box::new(recorder.clone()));

        assert!(timer.resume().is_none());
        timer.start();
        assert!(timer.resume().is_none());
        assert_eq!(recorder.count("will_resume"), 0);
    }

    #[test]
    fn test_stop_resets_elapsed_from_any_state() {
        let mut timer = new(Duration::from_secs(3));

        // From Idle.
        timer.stop();
        assert_eq!(timer.elapsed(), Duration::ZERO);

        // From Running.
        timer.start();
        for _ in 0..5 {
            tick_once(&mut timer);
        }
        assert!(timer.elapsed() > Duration::ZERO);
        timer.stop();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(!timer.running());

        // From Paused.
        timer.start();
        tick_once(&mut timer);
        timer.pause();
        timer.stop();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(!timer.paused());
    }

    #[test]
    fn test_stop_hook_ordering() {
        let recorder = Recorder::default();
        let mut timer =
            new(Duration::from_secs(3)).with_observer(Box::new(recorder.clone()));
        timer.start();
        timer.stop();
        assert_eq!(
            recorder.events(),
            vec!["will_start", "did_start", "will_stop", "did_stop"]
        );
    }

    #[test]
    fn test_gate_vetoes_silently() {
        let recorder = Recorder::default();
        let mut timer = new(Duration::from_secs(3))
            .with_observer(Box::new(recorder.clone()))
            .with_gate(Box::new(Refusal));

        assert!(timer.start().is_none());
        assert!(!timer.running());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_pause_gate_keeps_timer_running() {
        struct NoPause;
        impl Gate for NoPause {
            fn should_pause(&self) -> bool {
                false
            }
        }

        let mut timer = new(Duration::from_secs(3)).with_gate(Box::new(NoPause));
        timer.start();
        timer.pause();
        assert!(timer.running());
        assert!(!timer.paused());
    }

    #[test]
    fn test_unwinds_flips_direction_only() {
        let mut timer = new(Duration::from_secs(3));
        timer.start();
        for _ in 0..10 {
            tick_once(&mut timer);
        }
        let elapsed = timer.elapsed();
        let duration = timer.duration;

        timer.set_unwinds(true);
        assert!(timer.unwinds());
        assert_eq!(timer.elapsed(), elapsed);
        assert_eq!(timer.duration, duration);
        // The stroke end endpoint snaps to full for the depletion animation.
        assert_eq!(timer.stroke().end(), 1.0);

        // Toggling to the current value changes nothing.
        timer.set_unwinds(true);
        assert_eq!(timer.stroke().end(), 1.0);
    }

    #[test]
    fn test_unwind_run_depletes() {
        let mut timer = new(Duration::from_secs(1));
        timer.set_unwinds(true);
        timer.start();

        // The stroke starts full and the animated endpoint eats into it.
        assert_eq!(timer.stroke().end(), 1.0);
        for _ in 0..50 {
            tick_once(&mut timer);
        }
        assert!((timer.stroke().start() - 0.5).abs() < 1e-9);
        assert!((timer.progress() - 0.5).abs() < 1e-9);

        // Running to completion depletes the whole stroke before stopping.
        for _ in 0..50 {
            tick_once(&mut timer);
        }
        assert!(!timer.running());
        assert_eq!(timer.progress(), 1.0);
        assert_eq!(timer.stroke().start(), 1.0);
    }

    #[test]
    fn test_set_progress_clamped() {
        let mut timer = new(Duration::from_secs(3));
        timer.set_progress(0.4);
        assert_eq!(timer.progress(), 0.4);
        timer.set_progress(7.0);
        assert_eq!(timer.progress(), 1.0);
        timer.set_progress(-2.0);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_zero_duration_uses_default() {
        let mut timer = new_with_interval(Duration::ZERO, Duration::from_secs(1));
        timer.start();
        for _ in 0..4 {
            assert!(tick_once(&mut timer).is_some());
            assert!(timer.running());
        }
        // Fifth tick completes the 5-second default animation.
        tick_once(&mut timer);
        assert!(!timer.running());
    }

    #[test]
    fn test_update_with_wrong_id() {
        let mut timer = new(Duration::from_secs(3));
        timer.start();

        let msg = TickMsg {
            id: timer.id() + 999,
            tag: timer.tag,
        };
        assert!(timer.update(Box::new(msg)).is_none());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_update_with_stale_tag() {
        let mut timer = new(Duration::from_secs(3));
        timer.start();
        let stale = TickMsg {
            id: timer.id(),
            tag: timer.tag,
        };
        tick_once(&mut timer); // bumps the tag

        assert!(timer.update(Box::new(stale)).is_none());
    }

    #[test]
    fn test_visual_setters_forwarded() {
        let mut timer = new(Duration::from_secs(3));
        timer.set_line_width(3.0);
        assert_eq!(timer.line_width(), 3.0);
        timer.set_color("#00ff00");
        assert_eq!(timer.color(), "#00ff00");
        timer.set_clockwise(false);
        assert!(!timer.clockwise());
        timer.set_bounds(30, 9);
        assert_eq!(timer.stroke().bounds(), (30, 9));
    }

    #[test]
    fn test_view_dimensions() {
        let mut timer = new(Duration::from_secs(3));
        timer.set_bounds(12, 5);
        let frame = timer.view();
        assert_eq!(frame.lines().count(), 5);
    }

    #[test]
    fn test_default_model() {
        let timer = Model::default();
        assert_eq!(timer.duration, DEFAULT_DURATION);
        assert_eq!(timer.interval, DEFAULT_INTERVAL);
        assert!(!timer.running());
    }
}
