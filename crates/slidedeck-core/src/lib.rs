#![forbid(unsafe_code)]

//! Core: slide data model, canonical input events, and key mapping.
//!
//! # Role in slidedeck
//! `slidedeck-core` is the input and data layer. It owns the slide/deck
//! types the presentation displays and the normalized event types the
//! runtime consumes.
//!
//! # Primary responsibilities
//! - **Deck**: validated, non-empty, read-only sequence of slides.
//! - **Event**: canonical input events (keys, mouse, resize, fullscreen
//!   change notifications from the host).
//! - **Key mapping**: the declarative key-to-action table.
//!
//! # How it fits in the system
//! The runtime (`slidedeck-runtime`) consumes `slidedeck-core::Event`
//! values and drives the presentation controller. The front-end renders
//! from the controller's view snapshot, so `slidedeck-core` is the clean
//! bridge between host I/O and the pure state machine.

pub mod error;
pub mod event;
pub mod keymap;
pub mod slide;

pub use error::{DeckError, Result};
pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use keymap::{Action, action_for_key};
pub use slide::{Deck, Slide, SlideBody, SlideKind};
