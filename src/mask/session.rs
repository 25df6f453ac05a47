//! EditSession - the buffer, caret and output mode of one masked input.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::caret::Caret;
use super::engine;
use super::messages::MaskEvent;
use super::template::{Template, TemplateError};

/// Reasons a buffer fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidationError {
    /// Not enough slots hold a digit
    IncompleteNumber { filled: usize, required: usize },
    /// A required control has no digits at all
    Required,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::IncompleteNumber { .. } => write!(f, "Invalid phone number"),
            ValidationError::Required => write!(f, "This field is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Editing state for a single masked input.
///
/// The session is the only source of truth for the buffer and caret; a UI
/// writes them back to its native control after each [`apply`](Self::apply).
#[derive(Debug, Clone)]
pub struct EditSession {
    template: Arc<Template>,
    buffer: Vec<char>,
    caret: Caret,
    numbers_only: bool,
}

impl EditSession {
    /// Create a session seeded from a logical value (empty for a blank mask)
    pub fn new(template: Arc<Template>, initial_value: &str, numbers_only: bool) -> Self {
        let mut session = Self {
            buffer: template.chars().to_vec(),
            template,
            caret: Caret::default(),
            numbers_only,
        };
        if !initial_value.is_empty() {
            session.set_value(initial_value);
        }
        session
    }

    /// Parse `pattern` and create a session over it
    pub fn from_pattern(
        pattern: &str,
        initial_value: &str,
        numbers_only: bool,
    ) -> Result<Self, TemplateError> {
        let template = Template::new(pattern)?;
        Ok(Self::new(Arc::new(template), initial_value, numbers_only))
    }

    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    /// Display buffer, always `template.len()` characters
    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn buffer_chars(&self) -> &[char] {
        &self.buffer
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn numbers_only(&self) -> bool {
        self.numbers_only
    }

    /// Number of slots currently holding a digit
    pub fn filled_slots(&self) -> usize {
        engine::filled_slots(&self.template, &self.buffer)
    }

    /// Check if no slot holds a digit
    pub fn is_empty(&self) -> bool {
        self.filled_slots() == 0
    }

    /// Apply one event, updating buffer and caret in place
    pub fn apply(&mut self, event: MaskEvent) {
        match event {
            MaskEvent::Digit(digit) => {
                let (buffer, caret) =
                    engine::insert_digit(&self.template, &self.buffer, self.caret, digit);
                self.buffer = buffer;
                self.caret = caret;
            }
            MaskEvent::Destructive => {
                let (buffer, caret) = engine::delete_event(&self.template, &self.buffer, self.caret);
                self.buffer = buffer;
                self.caret = caret;
            }
            MaskEvent::Navigate(caret) => {
                self.caret = caret.clamp(self.template.len());
            }
            MaskEvent::Other => {}
        }
        debug_assert_eq!(self.buffer.len(), self.template.len());
    }

    /// The logical value: digits in slot order, or the whole buffer
    pub fn value(&self) -> String {
        if self.numbers_only {
            self.template
                .slot_positions()
                .iter()
                .map(|&i| self.buffer[i])
                .filter(char::is_ascii_digit)
                .collect()
        } else {
            self.buffer()
        }
    }

    /// Re-seed the buffer from an external logical value.
    ///
    /// In numbers-only mode the digits of `raw` fill successive slots; leftover
    /// slots keep the marker and leftover digits are dropped. Otherwise `raw` is
    /// read as an already-formatted buffer: literal positions always keep the
    /// template character and slots that do not hold a digit get the marker.
    pub fn set_value(&mut self, raw: &str) {
        let marker = self.template.marker();
        let mut buffer = self.template.chars().to_vec();

        if self.numbers_only {
            let digits = raw.chars().filter(char::is_ascii_digit);
            for (&slot, digit) in self.template.slot_positions().iter().zip(digits) {
                buffer[slot] = digit;
            }
        } else {
            for (i, ch) in raw.chars().take(buffer.len()).enumerate() {
                if self.template.is_slot(i) {
                    buffer[i] = if ch.is_ascii_digit() { ch } else { marker };
                }
            }
        }

        self.buffer = buffer;
        self.caret = Caret::default();
    }

    /// Check the buffer holds a complete number.
    ///
    /// Being exactly one digit short is tolerated only while the value does not
    /// start with a digit, which lets an optional leading slot stay empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = self.template.slot_count();
        let filled = self.filled_slots();
        let short = required.saturating_sub(filled);
        if short == 0 {
            return Ok(());
        }

        let leads_with_digit = self
            .value()
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());

        if (short == 1 && leads_with_digit) || short > 1 {
            Err(ValidationError::IncompleteNumber { filled, required })
        } else {
            Ok(())
        }
    }
}

/// Serializable view of a session for state dumps.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub template: String,
    pub buffer: String,
    pub caret: Caret,
    pub value: String,
    pub numbers_only: bool,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl SessionState {
    /// Snapshot `session` with the outcome of an externally run validation
    pub fn with_validation(session: &EditSession, validation: Result<(), ValidationError>) -> Self {
        let error = validation.err();
        Self {
            template: session.template.pattern(),
            buffer: session.buffer(),
            caret: session.caret,
            value: session.value(),
            numbers_only: session.numbers_only,
            valid: error.is_none(),
            error,
        }
    }
}

impl From<&EditSession> for SessionState {
    fn from(session: &EditSession) -> Self {
        Self::with_validation(session, session.validate())
    }
}
