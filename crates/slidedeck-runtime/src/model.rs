#![forbid(unsafe_code)]

//! Elm-style state transition contract.
//!
//! The model owns application state and mutates it only through
//! `update`, which returns commands describing the side effects the
//! host should execute. The model itself performs no I/O.

use web_time::Duration;

use slidedeck_core::Event;

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state.
    /// Must be convertible from host events.
    type Message: From<Event> + Send + 'static;

    /// Initialize the model with startup commands.
    ///
    /// Called once when the program mounts. Returns commands for initial
    /// side effects, e.g. arming the first inactivity deadline.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function. Returns commands for
    /// any side effects that should be executed.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;
}

/// Commands represent side effects to be executed by the host loop.
///
/// Commands are returned from `init()` and `update()`. The controller
/// requests effects; the host is the authority on whether they happen.
#[derive(Debug, PartialEq, Eq)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Execute multiple commands.
    Batch(Vec<Cmd<M>>),
    /// Send a message back to the model.
    Msg(M),
    /// Arm the inactivity deadline: deliver `InactivityElapsed { epoch }`
    /// after `delay` unless a newer epoch supersedes it first.
    ArmInactivity {
        /// Timer generation this deadline belongs to.
        epoch: u64,
        /// How long until the deadline elapses.
        delay: Duration,
    },
    /// Ask the host to enter fullscreen. Fire-and-forget; the host
    /// reports the outcome through a fullscreen-change notification.
    EnterFullscreen,
    /// Ask the host to exit fullscreen. Fire-and-forget, as above.
    ExitFullscreen,
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch of commands, flattening trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        if cmds.is_empty() {
            Self::None
        } else if cmds.len() == 1 {
            cmds.into_iter().next().unwrap()
        } else {
            Self::Batch(cmds)
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}
