//! Stateless buffer operations against a [`Template`].
//!
//! Every function takes the current buffer by reference and returns the next
//! one. Buffers are always exactly `template.len()` characters; writes that
//! would land past the end fall off and are dropped.

use super::caret::Caret;
use super::template::Template;

/// Reset the slot at `position` to the marker. Literals and out-of-range
/// positions are left alone.
pub fn clear_at(template: &Template, buffer: &[char], position: usize) -> Vec<char> {
    let mut next = buffer.to_vec();
    clear_slot(template, &mut next, position);
    next
}

/// Reset every slot in `start..end` to the marker
pub fn clear_range(template: &Template, buffer: &[char], start: usize, end: usize) -> Vec<char> {
    let mut next = buffer.to_vec();
    for position in start..end.min(next.len()) {
        clear_slot(template, &mut next, position);
    }
    next
}

/// Write `digit` at the caret, returning the new buffer and collapsed caret.
///
/// A selection is cleared first. When the caret sits on a literal the digit
/// goes into the next slot instead. The digit overwrites; nothing shifts.
pub fn insert_digit(
    template: &Template,
    buffer: &[char],
    caret: Caret,
    digit: char,
) -> (Vec<char>, Caret) {
    let len = template.len();
    let caret = caret.clamp(len);

    let mut next = if caret.is_collapsed() {
        buffer.to_vec()
    } else {
        clear_range(template, buffer, caret.start, caret.end)
    };

    let write_at = if template.is_literal(caret.start) {
        template.next_slot(caret.start)
    } else {
        caret.start
    };

    // Past the end, or onto a trailing literal: the digit is dropped
    if template.is_slot(write_at) {
        if let Some(slot) = next.get_mut(write_at) {
            *slot = digit;
        }
    }
    next.truncate(len);

    let after = template.next_slot(write_at).min(len);
    (next, Caret::collapsed(after))
}

/// Apply a Backspace/Delete keystroke.
///
/// With a selection, every slot inside it is cleared and the caret collapses
/// to its start. Otherwise the nearest slot before the caret is cleared and
/// the caret lands on it.
pub fn delete_event(template: &Template, buffer: &[char], caret: Caret) -> (Vec<char>, Caret) {
    let caret = caret.clamp(template.len());

    if !caret.is_collapsed() {
        let next = clear_range(template, buffer, caret.start, caret.end);
        return (next, Caret::collapsed(caret.start));
    }

    let target = template.prev_slot(caret.start);
    (clear_at(template, buffer, target), Caret::collapsed(target))
}

/// Number of slots holding a digit
pub fn filled_slots(template: &Template, buffer: &[char]) -> usize {
    template
        .slot_positions()
        .iter()
        .filter(|&&i| buffer.get(i).is_some_and(|c| c.is_ascii_digit()))
        .count()
}

fn clear_slot(template: &Template, buffer: &mut [char], position: usize) {
    if template.is_slot(position) {
        if let Some(ch) = buffer.get_mut(position) {
            *ch = template.marker();
        }
    }
}
