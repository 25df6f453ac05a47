//! Phone entry control
//!
//! Wraps an [`EditSession`] with the form-facing behaviour of a phone number
//! field: label and name prefix, required/disabled/touched state, and error
//! display. The surrounding form talks to it only through [`EntryMsg`]
//! values, and change notifications come back as [`EntryCmd`] values.

use std::sync::Arc;

use crate::config::PhoneEntryConfig;
use crate::keys::KeyCode;
use crate::mask::{Caret, EditSession, MaskEvent, SessionState, TemplateError, ValidationError};

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;

/// Form-level notifications, scoped to a form root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit { root: Option<String> },
    Reset { root: Option<String> },
}

impl FormEvent {
    fn root(&self) -> Option<&str> {
        match self {
            FormEvent::Submit { root } | FormEvent::Reset { root } => root.as_deref(),
        }
    }
}

/// Messages handled by [`PhoneEntry::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryMsg {
    /// A keydown, with the selection the native control reports for it
    Key { key: KeyCode, caret: Caret },
    /// Caret moved by mouse or programmatically
    Navigate(Caret),
    /// External value written into the control
    WriteValue(String),
    /// The control lost focus
    Touch,
    SetDisabled(bool),
    Form(FormEvent),
    /// Validity may have changed; used when not driven by form events
    StatusChanged,
}

/// Side effects the host should perform after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryCmd {
    /// The logical value changed
    ValueChanged(String),
    /// First blur since creation
    Touched,
}

/// A phone number input backed by a masked edit session
#[derive(Debug, Clone)]
pub struct PhoneEntry {
    config: PhoneEntryConfig,
    session: EditSession,
    disabled: bool,
    touched: bool,
    error: Option<ValidationError>,
}

impl PhoneEntry {
    pub fn new(config: PhoneEntryConfig, initial_value: &str) -> Result<Self, TemplateError> {
        let template = Arc::new(config.build_template()?);
        let session = EditSession::new(template, initial_value, config.numbers_only);
        Ok(Self {
            config,
            session,
            disabled: false,
            touched: false,
            error: None,
        })
    }

    pub fn config(&self) -> &PhoneEntryConfig {
        &self.config
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Current logical value
    pub fn value(&self) -> String {
        self.session.value()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Name/id attribute for a sub-element, with the configured prefix
    pub fn identifier(&self, name: &str) -> String {
        if self.config.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{}", self.config.prefix, name)
        }
    }

    /// Run the configured validations against the current buffer
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.config.required && self.session.is_empty() {
            return Err(ValidationError::Required);
        }
        if self.config.use_default_validations {
            self.session.validate()?;
        }
        Ok(())
    }

    /// Serializable state, validated with this control's settings
    pub fn state(&self) -> SessionState {
        SessionState::with_validation(&self.session, self.validate())
    }

    /// Error currently shown to the user
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// Handle one message.
    ///
    /// In debug builds this also logs the session diff.
    #[inline]
    pub fn update(&mut self, msg: EntryMsg) -> Option<EntryCmd> {
        #[cfg(debug_assertions)]
        {
            self.update_traced(msg)
        }
        #[cfg(not(debug_assertions))]
        {
            self.update_inner(msg)
        }
    }

    #[cfg(debug_assertions)]
    fn update_traced(&mut self, msg: EntryMsg) -> Option<EntryCmd> {
        let _span = tracing::debug_span!("update", msg = ?msg).entered();
        let before = SessionSnapshot::from_session(&self.session);

        let result = self.update_inner(msg);

        let after = SessionSnapshot::from_session(&self.session);
        if let Some(diff) = before.diff(&after) {
            tracing::debug!(target: "mask", %diff, "state changed");
        }
        result
    }

    fn update_inner(&mut self, msg: EntryMsg) -> Option<EntryCmd> {
        match msg {
            EntryMsg::Key { key, caret } => {
                if self.disabled {
                    return None;
                }
                // Edits start from the native selection; arrows adopt it as-is
                let event = key.to_event(caret);
                if event.is_editing() {
                    self.session.apply(MaskEvent::Navigate(caret));
                }
                self.apply_event(event)
            }
            EntryMsg::Navigate(caret) => {
                self.session.apply(MaskEvent::Navigate(caret));
                None
            }
            EntryMsg::WriteValue(value) => {
                self.session.set_value(&value);
                None
            }
            EntryMsg::Touch => {
                if self.touched {
                    None
                } else {
                    self.touched = true;
                    Some(EntryCmd::Touched)
                }
            }
            EntryMsg::SetDisabled(disabled) => {
                self.disabled = disabled;
                None
            }
            EntryMsg::Form(event) => {
                if !self.config.use_form_service || !self.owns(&event) {
                    return None;
                }
                match event {
                    FormEvent::Submit { .. } => self.refresh_error(),
                    FormEvent::Reset { .. } => self.error = None,
                }
                None
            }
            EntryMsg::StatusChanged => {
                if !self.config.use_form_service {
                    self.refresh_error();
                }
                None
            }
        }
    }

    fn apply_event(&mut self, event: MaskEvent) -> Option<EntryCmd> {
        let before = self.session.value();
        self.session.apply(event);
        let after = self.session.value();

        if before == after {
            None
        } else {
            tracing::trace!(target: "control", value = %after, "value changed");
            Some(EntryCmd::ValueChanged(after))
        }
    }

    /// Check if a form event is addressed to this control's form
    fn owns(&self, event: &FormEvent) -> bool {
        match event.root() {
            None => true,
            Some(root) => self.config.form.as_deref() == Some(root),
        }
    }

    fn refresh_error(&mut self) {
        self.error = self.validate().err();
    }
}
