#![forbid(unsafe_code)]

//! Key-to-action mapping.
//!
//! The presentation's key surface is deliberately small and fixed:
//!
//! | key | action |
//! |---|---|
//! | Right arrow, Space | [`Action::Next`] |
//! | Left arrow | [`Action::Prev`] |
//! | Home | [`Action::First`] |
//! | End | [`Action::Last`] |
//! | `f` / `F` | [`Action::ToggleFullscreen`] |
//!
//! Every other key maps to `None` and is a defined no-op, not an error.
//! Keys with Ctrl or Alt held are left to the front-end (e.g. Ctrl-C),
//! so the mapping only fires on plain or shifted presses.

use crate::event::{KeyCode, KeyEvent, Modifiers};

/// High-level presentation action resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
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
}

/// Resolve a key event to a presentation action.
///
/// Returns `None` for unmapped keys and for mapped keys held with Ctrl
/// or Alt.
#[must_use]
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(Action::Next),
        KeyCode::Left => Some(Action::Prev),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Action::ToggleFullscreen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn navigation_keys_map_to_actions() {
        assert_eq!(action_for_key(&key(KeyCode::Right)), Some(Action::Next));
        assert_eq!(action_for_key(&key(KeyCode::Char(' '))), Some(Action::Next));
        assert_eq!(action_for_key(&key(KeyCode::Left)), Some(Action::Prev));
        assert_eq!(action_for_key(&key(KeyCode::Home)), Some(Action::First));
        assert_eq!(action_for_key(&key(KeyCode::End)), Some(Action::Last));
    }

    #[test]
    fn fullscreen_key_is_case_insensitive() {
        assert_eq!(
            action_for_key(&key(KeyCode::Char('f'))),
            Some(Action::ToggleFullscreen)
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Char('F'))),
            Some(Action::ToggleFullscreen)
        );
    }

    #[test]
    fn shifted_navigation_still_maps() {
        let shifted = key(KeyCode::Right).with_modifiers(Modifiers::SHIFT);
        assert_eq!(action_for_key(&shifted), Some(Action::Next));
    }

    #[test]
    fn ctrl_and_alt_suppress_mapping() {
        let ctrl_f = key(KeyCode::Char('f')).with_modifiers(Modifiers::CTRL);
        assert_eq!(action_for_key(&ctrl_f), None);
        let alt_right = key(KeyCode::Right).with_modifiers(Modifiers::ALT);
        assert_eq!(action_for_key(&alt_right), None);
    }

    #[test]
    fn unmapped_keys_are_no_ops() {
        for code in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Escape,
            KeyCode::PageUp,
            KeyCode::PageDown,
            KeyCode::Char('x'),
            KeyCode::Char('0'),
        ] {
            assert_eq!(action_for_key(&key(code)), None, "{code:?}");
        }
    }
}
