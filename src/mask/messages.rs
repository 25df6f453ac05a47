//! Event types fed into an edit session.

use super::caret::Caret;

/// Classification of a keystroke for the mask state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A 0-9 key (main row or numeric keypad)
    Digit,
    /// Backspace or Delete
    Destructive,
    /// Left/right arrow
    Navigate,
    /// Anything else
    Other,
}

/// A single event applied to an [`EditSession`](super::EditSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskEvent {
    /// Write a digit at the caret
    Digit(char),
    /// Clear the selection, or the slot before a collapsed caret
    Destructive,
    /// Adopt a caret that the native control has already moved to
    Navigate(Caret),
    /// Ignored
    Other,
}

impl MaskEvent {
    /// Build a digit event, falling back to `Other` for non-digit chars
    pub fn digit(ch: char) -> Self {
        if ch.is_ascii_digit() {
            MaskEvent::Digit(ch)
        } else {
            MaskEvent::Other
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            MaskEvent::Digit(_) => EventKind::Digit,
            MaskEvent::Destructive => EventKind::Destructive,
            MaskEvent::Navigate(_) => EventKind::Navigate,
            MaskEvent::Other => EventKind::Other,
        }
    }

    /// Check if this event can change the buffer
    pub fn is_editing(&self) -> bool {
        matches!(self, MaskEvent::Digit(_) | MaskEvent::Destructive)
    }

    /// Check if this event only moves the caret
    pub fn is_movement(&self) -> bool {
        matches!(self, MaskEvent::Navigate(_))
    }
}
