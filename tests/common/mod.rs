//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use phone_mask::mask::{Caret, EditSession, MaskEvent, Template};

pub const PHONE: &str = "_+(___)___-____";

/// Create a session over the default phone template
pub fn phone_session(initial: &str, numbers_only: bool) -> EditSession {
    EditSession::new(Arc::new(Template::phone()), initial, numbers_only)
}

/// Create a session over an arbitrary template
pub fn session(template: &str, initial: &str, numbers_only: bool) -> EditSession {
    EditSession::from_pattern(template, initial, numbers_only).expect("valid template")
}

/// Type each digit of `digits` at the current caret
pub fn type_digits(session: &mut EditSession, digits: &str) {
    for ch in digits.chars() {
        session.apply(MaskEvent::Digit(ch));
    }
}

/// Move the caret (collapsed)
pub fn place_caret(session: &mut EditSession, pos: usize) {
    let len = session.template().len();
    session.apply(MaskEvent::Navigate(Caret::new(pos, pos, len)));
}

/// Select `start..end`
pub fn select(session: &mut EditSession, start: usize, end: usize) {
    let len = session.template().len();
    session.apply(MaskEvent::Navigate(Caret::new(start, end, len)));
}
