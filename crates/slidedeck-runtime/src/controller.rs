#![forbid(unsafe_code)]

//! The presentation controller: single authority over navigation,
//! controls visibility, and fullscreen intent.
//!
//! # State machine
//!
//! - `current` — slide index, always in `0..deck.len()`. Navigation
//!   wraps at both ends and is total: no operation can fail once the
//!   deck exists.
//! - `controls_visible` — toggled by pointer activity and the
//!   inactivity deadline.
//! - `fullscreen` — a mirror of the host's state. Toggle requests flip
//!   it optimistically for responsive UI, but the host's
//!   fullscreen-change notification is authoritative and overwrites it.
//!
//! # Inactivity epochs
//!
//! Exactly one inactivity deadline is logically live at a time. Arming a
//! new deadline increments `timer_epoch`, so a previously scheduled
//! timeout arrives with a stale epoch and is dropped. This replaces
//! "cancel the pending timer, then arm a new one" with a race-free
//! message discipline: a stale timer can fire but can never hide
//! controls that newer activity just revealed.
//!
//! Key-driven navigation deliberately does not count as activity; only
//! pointer movement re-arms the deadline (reference behavior).

use web_time::Duration;

use slidedeck_core::{Action, Deck, Event, MouseEventKind, Slide, action_for_key};

use crate::model::{Cmd, Model};
use crate::view::DeckView;

/// How long the controls stay visible after the last pointer activity.
pub const INACTIVITY_DELAY: Duration = Duration::from_millis(3000);

/// Messages driving the presentation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Advance to the next slide, wrapping last to first.
    Next,
    /// Retreat to the previous slide, wrapping first to last.
    Prev,
    /// Jump to the first slide.
    First,
    /// Jump to the last slide.
    Last,
    /// Request the host to toggle fullscreen.
    ToggleFullscreen,
    /// Pointer activity: reveal controls and re-arm the deadline.
    Activity,
    /// The inactivity deadline armed at `epoch` elapsed.
    InactivityElapsed {
        /// Timer generation the deadline was armed under.
        epoch: u64,
    },
    /// The host reported its actual fullscreen state.
    FullscreenChanged(bool),
    /// Quit the presentation.
    Quit,
    /// An event with no effect on presentation state.
    Noop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => match action_for_key(&key) {
                Some(Action::Next) => Msg::Next,
                Some(Action::Prev) => Msg::Prev,
                Some(Action::First) => Msg::First,
                Some(Action::Last) => Msg::Last,
                Some(Action::ToggleFullscreen) => Msg::ToggleFullscreen,
                None => Msg::Noop,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved => Msg::Activity,
            Event::Mouse(_) => Msg::Noop,
            Event::Resize { .. } => Msg::Noop,
            Event::FullscreenChanged(active) => Msg::FullscreenChanged(active),
        }
    }
}

/// Owns all presentation state and mutates it only through [`Model::update`].
#[derive(Debug)]
pub struct PresentationController {
    deck: Deck,
    current: usize,
    controls_visible: bool,
    fullscreen: bool,
    timer_epoch: u64,
}

impl PresentationController {
    /// Create a controller over a validated deck.
    ///
    /// Controls start visible; [`Model::init`] arms the first inactivity
    /// deadline.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            current: 0,
            controls_visible: true,
            fullscreen: false,
            timer_epoch: 0,
        }
    }

    /// The deck being presented.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current slide index, in `0..deck.len()`.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// The slide currently shown.
    #[must_use]
    pub fn slide(&self) -> &Slide {
        // Invariant: current < deck.len(), maintained by every transition.
        &self.deck.slides()[self.current]
    }

    /// Whether the on-screen controls are visible.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// The controller's mirror of the host fullscreen state.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Read-only snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> DeckView<'_> {
        DeckView {
            slide: self.slide(),
            current: self.current,
            count: self.deck.len(),
            controls_visible: self.controls_visible,
            fullscreen: self.fullscreen,
        }
    }

    fn arm_inactivity(&mut self) -> Cmd<Msg> {
        self.timer_epoch += 1;
        Cmd::ArmInactivity {
            epoch: self.timer_epoch,
            delay: INACTIVITY_DELAY,
        }
    }
}

impl Model for PresentationController {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        // Mount counts as activity: controls are up and the clock runs.
        self.controls_visible = true;
        self.arm_inactivity()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        let n = self.deck.len();
        match msg {
            Msg::Next => {
                self.current = (self.current + 1) % n;
                tracing::debug!(slide = self.current, "advance");
                Cmd::none()
            }
            Msg::Prev => {
                self.current = (self.current + n - 1) % n;
                tracing::debug!(slide = self.current, "retreat");
                Cmd::none()
            }
            Msg::First => {
                self.current = 0;
                Cmd::none()
            }
            Msg::Last => {
                self.current = n - 1;
                Cmd::none()
            }
            Msg::ToggleFullscreen => {
                // Optimistic flip; the host's FullscreenChanged wins.
                let cmd = if self.fullscreen {
                    Cmd::ExitFullscreen
                } else {
                    Cmd::EnterFullscreen
                };
                self.fullscreen = !self.fullscreen;
                tracing::debug!(requested = self.fullscreen, "fullscreen toggle requested");
                cmd
            }
            Msg::Activity => {
                self.controls_visible = true;
                self.arm_inactivity()
            }
            Msg::InactivityElapsed { epoch } => {
                if epoch == self.timer_epoch {
                    self.controls_visible = false;
                    tracing::debug!("controls hidden after inactivity");
                } else {
                    tracing::trace!(epoch, current = self.timer_epoch, "stale inactivity timer");
                }
                Cmd::none()
            }
            Msg::FullscreenChanged(active) => {
                self.fullscreen = active;
                Cmd::none()
            }
            Msg::Quit => Cmd::quit(),
            Msg::Noop => Cmd::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidedeck_core::{KeyCode, KeyEvent, MouseEvent, SlideKind};

    fn deck(n: usize) -> Deck {
        let slides = (0..n)
            .map(|i| Slide::new(SlideKind::Content).with_title(format!("Slide {}", i + 1)))
            .collect();
        Deck::new(slides).unwrap()
    }

    fn controller(n: usize) -> PresentationController {
        PresentationController::new(deck(n))
    }

    #[test]
    fn starts_on_first_slide_with_controls_visible() {
        let ctrl = controller(3);
        assert_eq!(ctrl.current(), 0);
        assert!(ctrl.controls_visible());
        assert!(!ctrl.is_fullscreen());
    }

    #[test]
    fn init_arms_first_deadline() {
        let mut ctrl = controller(3);
        let cmd = ctrl.init();
        assert_eq!(
            cmd,
            Cmd::ArmInactivity {
                epoch: 1,
                delay: INACTIVITY_DELAY
            }
        );
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut ctrl = controller(3);
        ctrl.update(Msg::Last);
        assert_eq!(ctrl.current(), 2);
        ctrl.update(Msg::Next);
        assert_eq!(ctrl.current(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut ctrl = controller(3);
        ctrl.update(Msg::Prev);
        assert_eq!(ctrl.current(), 2);
    }

    #[test]
    fn jumps_are_absolute() {
        let mut ctrl = controller(5);
        ctrl.update(Msg::Next);
        ctrl.update(Msg::Next);
        ctrl.update(Msg::First);
        assert_eq!(ctrl.current(), 0);
        ctrl.update(Msg::Last);
        assert_eq!(ctrl.current(), 4);
    }

    #[test]
    fn single_slide_deck_navigation_is_identity() {
        let mut ctrl = controller(1);
        for msg in [Msg::Next, Msg::Prev, Msg::First, Msg::Last] {
            ctrl.update(msg);
            assert_eq!(ctrl.current(), 0);
        }
    }

    #[test]
    fn toggle_requests_enter_when_not_fullscreen() {
        let mut ctrl = controller(2);
        let cmd = ctrl.update(Msg::ToggleFullscreen);
        assert_eq!(cmd, Cmd::EnterFullscreen);
        assert!(ctrl.is_fullscreen(), "optimistic flip");
    }

    #[test]
    fn toggle_requests_exit_when_fullscreen() {
        let mut ctrl = controller(2);
        ctrl.update(Msg::FullscreenChanged(true));
        let cmd = ctrl.update(Msg::ToggleFullscreen);
        assert_eq!(cmd, Cmd::ExitFullscreen);
        assert!(!ctrl.is_fullscreen());
    }

    #[test]
    fn rejected_fullscreen_request_self_corrects() {
        let mut ctrl = controller(2);
        ctrl.update(Msg::ToggleFullscreen);
        assert!(ctrl.is_fullscreen());
        // Host refused the request and reports the true state.
        ctrl.update(Msg::FullscreenChanged(false));
        assert!(!ctrl.is_fullscreen());
    }

    #[test]
    fn activity_reveals_controls_and_rearms() {
        let mut ctrl = controller(2);
        ctrl.init();
        ctrl.update(Msg::InactivityElapsed { epoch: 1 });
        assert!(!ctrl.controls_visible());

        let cmd = ctrl.update(Msg::Activity);
        assert!(ctrl.controls_visible());
        assert_eq!(
            cmd,
            Cmd::ArmInactivity {
                epoch: 2,
                delay: INACTIVITY_DELAY
            }
        );
    }

    #[test]
    fn current_epoch_timeout_hides_controls() {
        let mut ctrl = controller(2);
        ctrl.init();
        assert!(ctrl.controls_visible());
        ctrl.update(Msg::InactivityElapsed { epoch: 1 });
        assert!(!ctrl.controls_visible());
    }

    #[test]
    fn stale_epoch_timeout_is_dropped() {
        let mut ctrl = controller(2);
        ctrl.init();
        ctrl.update(Msg::Activity); // epoch now 2, timer 1 superseded
        ctrl.update(Msg::InactivityElapsed { epoch: 1 });
        assert!(
            ctrl.controls_visible(),
            "a superseded timer must not hide controls"
        );
        ctrl.update(Msg::InactivityElapsed { epoch: 2 });
        assert!(!ctrl.controls_visible());
    }

    #[test]
    fn key_navigation_does_not_rearm_inactivity() {
        let mut ctrl = controller(3);
        ctrl.init();
        let cmd = ctrl.update(Msg::Next);
        assert_eq!(cmd, Cmd::None, "navigation must not touch the timer");
        // The original deadline still applies.
        ctrl.update(Msg::InactivityElapsed { epoch: 1 });
        assert!(!ctrl.controls_visible());
    }

    #[test]
    fn events_convert_to_messages() {
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::new(KeyCode::Right))),
            Msg::Next
        );
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::new(KeyCode::Char(' ')))),
            Msg::Next
        );
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::new(KeyCode::Char('F')))),
            Msg::ToggleFullscreen
        );
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::new(KeyCode::Char('z')))),
            Msg::Noop
        );
        assert_eq!(
            Msg::from(Event::Mouse(MouseEvent::new(MouseEventKind::Moved, 4, 2))),
            Msg::Activity
        );
        assert_eq!(
            Msg::from(Event::Resize {
                width: 80,
                height: 24
            }),
            Msg::Noop
        );
        assert_eq!(
            Msg::from(Event::FullscreenChanged(true)),
            Msg::FullscreenChanged(true)
        );
    }

    #[test]
    fn quit_message_quits() {
        let mut ctrl = controller(2);
        assert_eq!(ctrl.update(Msg::Quit), Cmd::Quit);
    }
}
