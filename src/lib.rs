//! phone-mask - masked phone number input
//!
//! This crate provides a template-driven input mask engine, the phone entry
//! control built on it, and the month-grid calendar used by date pickers.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod control;
pub mod keys;
pub mod mask;
pub mod tracing;

// Re-export commonly used types
pub use calendar::Calendar;
pub use config::PhoneEntryConfig;
pub use control::{EntryCmd, EntryMsg, FormEvent, PhoneEntry};
pub use keys::KeyCode;
pub use mask::{Caret, EditSession, MaskEvent, Template, ValidationError};
