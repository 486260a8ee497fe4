#![forbid(unsafe_code)]

//! The event loop: host events in, commands out.
//!
//! Owns the terminal session, the controller, and the subscription
//! manager. Each iteration drains timer messages, polls the terminal
//! for input, feeds the controller, executes the commands it returns,
//! and re-presents when state changed. Teardown is deterministic: the
//! subscription manager stops its timer threads and the session
//! restores the terminal, both on drop.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self as ct, Event as CtEvent, KeyCode as CtKeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind as CtMouseKind,
};

use slidedeck_core::{Deck, Event, KeyCode, KeyEvent, Modifiers, MouseEvent, MouseEventKind};
use slidedeck_runtime::{Cmd, Delay, Model, Msg, PresentationController, SubscriptionManager};

use crate::render::render_lines;
use crate::session::TerminalSession;

/// How long one loop iteration blocks waiting for terminal input.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// What a raw terminal event means to the loop.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Leave the presentation.
    Quit,
    /// Forward to the controller.
    Forward(Event),
    /// Not interesting.
    Ignore,
}

/// Translate a crossterm event into loop input.
///
/// Quit keys (`q`, Esc, Ctrl-C) are the front-end's own surface and are
/// intercepted here; everything else goes through the controller's key
/// mapping, where unmapped keys are defined no-ops.
fn translate(event: CtEvent) -> Input {
    match event {
        CtEvent::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            if key.code == CtKeyCode::Esc
                || (key.code == CtKeyCode::Char('q') && key.modifiers.is_empty())
                || (key.code == CtKeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                return Input::Quit;
            }
            let code = match key.code {
                CtKeyCode::Char(c) => KeyCode::Char(c),
                CtKeyCode::Enter => KeyCode::Enter,
                CtKeyCode::Esc => KeyCode::Escape,
                CtKeyCode::Home => KeyCode::Home,
                CtKeyCode::End => KeyCode::End,
                CtKeyCode::PageUp => KeyCode::PageUp,
                CtKeyCode::PageDown => KeyCode::PageDown,
                CtKeyCode::Up => KeyCode::Up,
                CtKeyCode::Down => KeyCode::Down,
                CtKeyCode::Left => KeyCode::Left,
                CtKeyCode::Right => KeyCode::Right,
                _ => return Input::Ignore,
            };
            let mut modifiers = Modifiers::NONE;
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                modifiers |= Modifiers::SHIFT;
            }
            if key.modifiers.contains(KeyModifiers::ALT) {
                modifiers |= Modifiers::ALT;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                modifiers |= Modifiers::CTRL;
            }
            Input::Forward(Event::Key(KeyEvent::new(code).with_modifiers(modifiers)))
        }
        CtEvent::Key(_) => Input::Ignore,
        CtEvent::Mouse(mouse) => match mouse.kind {
            // Dragging moves the pointer too; both count as activity.
            CtMouseKind::Moved | CtMouseKind::Drag(_) => Input::Forward(Event::Mouse(
                MouseEvent::new(MouseEventKind::Moved, mouse.column, mouse.row),
            )),
            _ => Input::Ignore,
        },
        CtEvent::Resize(width, height) => Input::Forward(Event::Resize { width, height }),
        _ => Input::Ignore,
    }
}

/// Present `deck` until the user quits.
pub fn run(deck: Deck) -> io::Result<()> {
    let session = TerminalSession::new()?;
    let mut app = App {
        session,
        controller: PresentationController::new(deck),
        subs: SubscriptionManager::new(),
        running: true,
        dirty: true,
    };
    app.run_loop()
}

struct App {
    session: TerminalSession,
    controller: PresentationController,
    subs: SubscriptionManager<Msg>,
    running: bool,
    dirty: bool,
}

impl App {
    fn run_loop(&mut self) -> io::Result<()> {
        let cmd = self.controller.init();
        self.execute(cmd)?;
        self.session.clear()?;
        self.present()?;

        while self.running {
            for msg in self.subs.drain_messages() {
                self.dispatch(msg)?;
            }
            if !self.running {
                break;
            }

            if ct::poll(POLL_TIMEOUT)? {
                match translate(ct::read()?) {
                    Input::Quit => self.dispatch(Msg::Quit)?,
                    Input::Forward(event) => {
                        if let Event::Resize { .. } = event {
                            self.dirty = true;
                        }
                        self.dispatch(Msg::from(event))?;
                    }
                    Input::Ignore => {}
                }
            }

            if self.dirty {
                self.present()?;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        if msg != Msg::Noop {
            self.dirty = true;
        }
        let cmd = self.controller.update(msg);
        self.execute(cmd)
    }

    fn execute(&mut self, cmd: Cmd<Msg>) -> io::Result<()> {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(msg) => self.dispatch(msg)?,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd)?;
                }
            }
            Cmd::ArmInactivity { epoch, delay } => {
                // One declared timer: reconciliation stops the previous
                // epoch's thread before this one starts.
                self.subs.reconcile(vec![Box::new(Delay::new(epoch, delay, move || {
                    Msg::InactivityElapsed { epoch }
                }))]);
            }
            Cmd::EnterFullscreen => {
                let actual = self.session.set_fullscreen(true)?;
                self.dispatch(Msg::FullscreenChanged(actual))?;
            }
            Cmd::ExitFullscreen => {
                let actual = self.session.set_fullscreen(false)?;
                self.dispatch(Msg::FullscreenChanged(actual))?;
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let (width, height) = self.session.size()?;
        let rows = render_lines(&self.controller.view(), width, height);
        self.session.present(&rows)?;
        self.dirty = false;
        Ok(())
    }
}
