#![forbid(unsafe_code)]

//! Runtime: the presentation state machine and its timer plumbing.
//!
//! # Role in slidedeck
//! `slidedeck-runtime` owns the update loop contract. The front-end feeds
//! it events; it returns commands (side-effect requests) for the
//! front-end to execute and exposes a read-only view snapshot to render.
//!
//! # Primary responsibilities
//! - **Model/Cmd**: Elm-style state transition contract.
//! - **PresentationController**: navigation, controls visibility, and
//!   fullscreen reconciliation.
//! - **Subscriptions**: background timer delivery with deterministic
//!   teardown (no callback outlives its controller).
//!
//! # How it fits in the system
//! The controller is rendering-agnostic: it never touches a terminal.
//! The front-end (`slidedeck-tui`) translates host events into messages,
//! executes the returned commands against the real terminal, and draws
//! from [`view::DeckView`].

pub mod controller;
pub mod model;
pub mod subscription;
pub mod view;

pub use controller::{INACTIVITY_DELAY, Msg, PresentationController};
pub use model::{Cmd, Model};
pub use subscription::{Delay, StopSignal, Subscription, SubscriptionManager};
pub use view::DeckView;
