//! Mask templates: a fixed-length pattern of literal characters and editable slots.

use std::fmt;

/// Default placeholder character marking an empty, editable slot.
pub const DEFAULT_MARKER: char = '_';

/// Default phone number format (country code, area code, exchange, line).
pub const DEFAULT_PHONE_TEMPLATE: &str = "_+(___)___-____";

/// Error raised when a pattern cannot serve as a mask template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The pattern has no characters at all
    Empty,
    /// The pattern contains no marker character, so nothing is editable
    NoSlots { pattern: String, marker: char },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Empty => write!(f, "Invalid template: pattern is empty"),
            TemplateError::NoSlots { pattern, marker } => write!(
                f,
                "Invalid template: '{}' has no '{}' slots",
                pattern, marker
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// An immutable mask template.
///
/// Slot and literal positions are derived once at construction. A template is
/// never mutated afterwards, so one instance can back any number of sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: Vec<char>,
    marker: char,
    /// Editable positions, ascending
    slots: Vec<usize>,
    /// `true` at every literal position
    literal: Vec<bool>,
}

impl Template {
    /// Create a template using the default `_` marker
    pub fn new(pattern: &str) -> Result<Self, TemplateError> {
        Self::with_marker(pattern, DEFAULT_MARKER)
    }

    /// Create a template with a custom marker character
    pub fn with_marker(pattern: &str, marker: char) -> Result<Self, TemplateError> {
        if pattern.is_empty() {
            return Err(TemplateError::Empty);
        }

        let template = Self::build(pattern, marker);
        if template.slots.is_empty() {
            return Err(TemplateError::NoSlots {
                pattern: pattern.to_string(),
                marker,
            });
        }
        Ok(template)
    }

    /// The default `_+(___)___-____` phone template
    pub fn phone() -> Self {
        Self::build(DEFAULT_PHONE_TEMPLATE, DEFAULT_MARKER)
    }

    fn build(pattern: &str, marker: char) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let literal: Vec<bool> = pattern.iter().map(|&c| c != marker).collect();
        let slots = literal
            .iter()
            .enumerate()
            .filter_map(|(i, &is_literal)| (!is_literal).then_some(i))
            .collect();

        Self {
            pattern,
            marker,
            slots,
            literal,
        }
    }

    /// Number of characters in the pattern (N)
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always false; construction rejects empty patterns
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Pattern characters
    pub fn chars(&self) -> &[char] {
        &self.pattern
    }

    /// Pattern as a String (also the initial, empty buffer)
    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    /// Editable positions in ascending order
    pub fn slot_positions(&self) -> &[usize] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Fixed positions in ascending order
    pub fn literal_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.literal
            .iter()
            .enumerate()
            .filter_map(|(i, &is_literal)| is_literal.then_some(i))
    }

    /// Check if `index` is a fixed character. Out-of-range indices are neither.
    pub fn is_literal(&self, index: usize) -> bool {
        self.literal.get(index).copied().unwrap_or(false)
    }

    /// Check if `index` is an editable slot. Out-of-range indices are neither.
    pub fn is_slot(&self, index: usize) -> bool {
        self.literal.get(index).is_some_and(|&is_literal| !is_literal)
    }

    /// Smallest slot strictly after `from`, or `from + 1` when there is none.
    ///
    /// The fallback can point past the end of the buffer; callers clamp.
    pub fn next_slot(&self, from: usize) -> usize {
        let idx = self.slots.partition_point(|&slot| slot <= from);
        self.slots.get(idx).copied().unwrap_or(from + 1)
    }

    /// Largest slot strictly before `from`, or the first slot when there is none.
    pub fn prev_slot(&self, from: usize) -> usize {
        let idx = self.slots.partition_point(|&slot| slot < from);
        if idx == 0 {
            self.slots[0]
        } else {
            self.slots[idx - 1]
        }
    }

    /// First editable position
    pub fn first_slot(&self) -> usize {
        self.slots[0]
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

impl std::str::FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::phone()
    }
}
