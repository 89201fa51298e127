//! Decoding of terminal key events into the bar's navigation key set.

use crossterm::event::{KeyCode, KeyEvent, MediaKeyCode};

/// The set of keys the control bar reacts to.
///
/// TV remotes deliver a D-pad (four arrows plus a center/select key)
/// and a pair of transport keys. The transport keys are decoded so the
/// state machine can ignore them deliberately rather than by accident;
/// seeking is the player's job, not the bar's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Left arrow: previous eligible control in the active row.
    Left,
    /// Right arrow: next eligible control in the active row.
    Right,
    /// Up arrow: cross-row jump or default focus.
    Up,
    /// Down arrow: cross-row jump or default focus.
    Down,
    /// Enter / remote center: activate the active control.
    Select,
    /// Transport key; recognized and ignored.
    Rewind,
    /// Transport key; recognized and ignored.
    FastForward,
}

impl NavKey {
    /// Decode a key event. Returns `None` for keys outside the
    /// navigation set, which the bar ignores entirely.
    pub fn decode(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Enter => Some(Self::Select),
            KeyCode::Media(MediaKeyCode::Rewind) => Some(Self::Rewind),
            KeyCode::Media(MediaKeyCode::FastForward) => Some(Self::FastForward),
            _ => None,
        }
    }
}
