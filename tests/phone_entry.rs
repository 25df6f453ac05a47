//! Masked phone entry tests - typing, selection replacement, deletion, validation

mod common;

use common::{phone_session, place_caret, select, session, type_digits, PHONE};
use phone_mask::mask::{engine, Caret, MaskEvent, Template, ValidationError};

// ========================================================================
// Typing
// ========================================================================

#[test]
fn test_blank_session_shows_template() {
    let s = phone_session("", false);
    assert_eq!(s.buffer(), PHONE);
    assert_eq!(s.value(), PHONE);
    assert_eq!(s.caret(), Caret::collapsed(0));
}

#[test]
fn test_typing_ten_digits_skips_literals() {
    let mut s = phone_session("", false);
    type_digits(&mut s, "5551234567");

    assert_eq!(s.buffer(), "5+(551)234-567_");
    assert_eq!(s.caret(), Caret::collapsed(14));
}

#[test]
fn test_typing_all_slots_validates() {
    let mut s = phone_session("", false);
    type_digits(&mut s, "5551234567");
    // One short with a leading digit is still incomplete
    assert_eq!(
        s.validate(),
        Err(ValidationError::IncompleteNumber {
            filled: 10,
            required: 11
        })
    );

    type_digits(&mut s, "8");
    assert_eq!(s.buffer(), "5+(551)234-5678");
    assert_eq!(s.caret(), Caret::collapsed(15));
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn test_typing_past_end_is_ignored() {
    let mut s = phone_session("1+(555)123-4567", false);
    place_caret(&mut s, 15);
    type_digits(&mut s, "99");
    assert_eq!(s.buffer(), "1+(555)123-4567");
    assert_eq!(s.caret(), Caret::collapsed(15));
}

#[test]
fn test_typing_without_country_code_is_valid() {
    let mut s = phone_session("", false);
    place_caret(&mut s, 2);
    type_digits(&mut s, "5551234567");
    assert_eq!(s.buffer(), "_+(555)123-4567");
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn test_typing_on_literal_writes_next_slot() {
    let mut s = phone_session("", false);
    place_caret(&mut s, 10);
    type_digits(&mut s, "4");
    assert_eq!(s.buffer(), "_+(___)___-4___");
    assert_eq!(s.caret(), Caret::collapsed(12));
}

// ========================================================================
// Selection replacement
// ========================================================================

#[test]
fn test_digit_replaces_area_code_selection() {
    let mut s = phone_session("1+(555)123-4567", false);
    select(&mut s, 3, 6);
    s.apply(MaskEvent::Digit('9'));

    assert_eq!(s.buffer(), "1+(9__)123-4567");
    assert_eq!(s.caret(), Caret::collapsed(4));
}

#[test]
fn test_digit_replaces_selection_starting_on_literal() {
    let mut s = phone_session("1+(555)123-4567", false);
    select(&mut s, 2, 7);
    s.apply(MaskEvent::Digit('9'));

    assert_eq!(s.buffer(), "1+(9__)123-4567");
    assert_eq!(s.caret(), Caret::collapsed(4));
}

#[test]
fn test_stale_selection_is_clamped() {
    let mut s = phone_session("1+(555)123-4567", false);
    s.apply(MaskEvent::Navigate(Caret { start: 12, end: 40 }));
    assert_eq!(s.caret(), Caret { start: 12, end: 15 });

    s.apply(MaskEvent::Destructive);
    assert_eq!(s.buffer(), "1+(555)123-4___");
    assert_eq!(s.caret(), Caret::collapsed(12));
}

// ========================================================================
// Backspace / Delete
// ========================================================================

#[test]
fn test_backspace_after_dash_clears_previous_slot() {
    let mut s = phone_session("1+(555)123-4567", false);
    place_caret(&mut s, 11);
    s.apply(MaskEvent::Destructive);

    assert_eq!(s.buffer(), "1+(555)12_-4567");
    assert_eq!(s.caret(), Caret::collapsed(9));
}

#[test]
fn test_repeated_backspace_walks_left() {
    let mut s = phone_session("1+(555)123-4567", false);
    place_caret(&mut s, 15);
    for _ in 0..5 {
        s.apply(MaskEvent::Destructive);
    }
    assert_eq!(s.buffer(), "1+(555)12_-____");
    assert_eq!(s.caret(), Caret::collapsed(9));
}

#[test]
fn test_backspace_at_start_stays_on_first_slot() {
    let mut s = phone_session("1+(555)123-4567", false);
    s.apply(MaskEvent::Destructive);
    s.apply(MaskEvent::Destructive);
    assert_eq!(s.buffer(), "_+(555)123-4567");
    assert_eq!(s.caret(), Caret::collapsed(0));
}

#[test]
fn test_delete_selection_keeps_literals() {
    let mut s = phone_session("1+(555)123-4567", false);
    select(&mut s, 0, 15);
    s.apply(MaskEvent::Destructive);
    assert_eq!(s.buffer(), PHONE);
    assert_eq!(s.caret(), Caret::collapsed(0));
}

// ========================================================================
// Output modes
// ========================================================================

#[test]
fn test_numbers_only_set_value() {
    let mut s = session("___-____", "", true);
    s.set_value("5551234");
    assert_eq!(s.buffer(), "555-1234");
    assert_eq!(s.value(), "5551234");
}

#[test]
fn test_numbers_only_value_tracks_edits() {
    let mut s = phone_session("15551234567", true);
    assert_eq!(s.buffer(), "1+(555)123-4567");

    place_caret(&mut s, 7);
    s.apply(MaskEvent::Destructive);
    assert_eq!(s.value(), "1551234567");
}

#[test]
fn test_numbers_only_ignores_formatting_in_raw_value() {
    let mut s = phone_session("", true);
    s.set_value("+1 (555) 123-4567");
    assert_eq!(s.buffer(), "1+(555)123-4567");
}

#[test]
fn test_formatted_round_trip_is_idempotent() {
    for initial in ["", "1+(555)123-4567", "_+(55_)1__-45__", "junk"] {
        let mut s = phone_session(initial, false);
        let value = s.value();
        s.set_value(&value);
        let once = s.buffer();
        let again = s.value();
        s.set_value(&again);
        assert_eq!(s.buffer(), once, "initial {:?}", initial);
        assert_eq!(s.value(), again, "initial {:?}", initial);
    }
}

#[test]
fn test_other_events_change_nothing() {
    let mut s = phone_session("1+(555)123-4567", false);
    select(&mut s, 3, 6);
    s.apply(MaskEvent::Other);
    assert_eq!(s.buffer(), "1+(555)123-4567");
    assert_eq!(s.caret(), Caret::new(3, 6, 15));
}

// ========================================================================
// Engine properties
// ========================================================================

#[test]
fn test_clear_at_literal_is_noop_for_many_templates() {
    for pattern in [PHONE, "___-____", "(__) __", "#_#_#"] {
        let t = Template::new(pattern).unwrap();
        let filled: Vec<char> = pattern.chars().map(|c| if c == '_' { '7' } else { c }).collect();
        for i in t.literal_positions() {
            assert_eq!(engine::clear_at(&t, &filled, i), filled, "{} @ {}", pattern, i);
        }
    }
}

#[test]
fn test_every_event_preserves_buffer_length() {
    let mut s = phone_session("", false);
    let events = [
        MaskEvent::Digit('1'),
        MaskEvent::Navigate(Caret::new(5, 12, 15)),
        MaskEvent::Digit('2'),
        MaskEvent::Destructive,
        MaskEvent::Navigate(Caret::collapsed(99)),
        MaskEvent::Digit('3'),
        MaskEvent::Other,
        MaskEvent::Destructive,
    ];
    for event in events {
        s.apply(event);
        assert_eq!(s.buffer().chars().count(), PHONE.len());
    }
}

#[test]
fn test_shared_template_sessions_are_independent() {
    use std::sync::Arc;
    use phone_mask::mask::EditSession;

    let template = Arc::new(Template::phone());
    let mut a = EditSession::new(Arc::clone(&template), "", false);
    let b = EditSession::new(Arc::clone(&template), "", true);

    type_digits(&mut a, "1");
    assert_eq!(a.buffer(), "1+(___)___-____");
    assert_eq!(b.buffer(), PHONE);
}
