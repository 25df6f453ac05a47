//! Masked text input engine.
//!
//! A template such as `_+(___)___-____` fixes the shape of the input: `_`
//! marks an editable slot and every other character is a literal that the
//! user can never change. Keystrokes are fed in one at a time and the engine
//! keeps the buffer, caret and logical value in sync.
//!
//! # Architecture
//!
//! - [`Template`]: immutable pattern with precomputed slot positions
//! - [`engine`]: stateless slot navigation and buffer mutation
//! - [`MaskEvent`]: the closed set of events a session understands
//! - [`EditSession`]: buffer, caret and output mode for one input
//!
//! # Example
//!
//! ```
//! use phone_mask::mask::{EditSession, MaskEvent};
//!
//! let mut session = EditSession::from_pattern("___-____", "", true).unwrap();
//! for digit in "5551234".chars() {
//!     session.apply(MaskEvent::Digit(digit));
//! }
//!
//! assert_eq!(session.buffer(), "555-1234");
//! assert_eq!(session.value(), "5551234");
//! ```

mod caret;
pub mod engine;
mod messages;
mod session;
mod template;

pub use caret::Caret;
pub use messages::{EventKind, MaskEvent};
pub use session::{EditSession, SessionState, ValidationError};
pub use template::{Template, TemplateError, DEFAULT_MARKER, DEFAULT_PHONE_TEMPLATE};
