//! Debug tracing infrastructure
//!
//! Configure via RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=mask=trace,control=debug` - scoped filtering
//!
//! Logs are also written to `~/.config/phone-mask/logs/phone-mask.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::mask::{Caret, EditSession};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "phone-mask.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight copy of session state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub buffer: String,
    pub caret: Caret,
}

impl SessionSnapshot {
    pub fn from_session(session: &EditSession) -> Self {
        Self {
            buffer: session.buffer(),
            caret: session.caret(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.buffer != other.buffer {
            changes.push(format!("buffer: {} → {}", self.buffer, other.buffer));
        }
        if self.caret != other.caret {
            changes.push(format!(
                "caret: [{},{}] → [{},{}]",
                self.caret.start, self.caret.end, other.caret.start, other.caret.end
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskEvent;

    #[test]
    fn test_snapshot_diff() {
        let mut session = EditSession::from_pattern("___-____", "", false).unwrap();
        let before = SessionSnapshot::from_session(&session);
        assert_eq!(before.diff(&before), None);

        session.apply(MaskEvent::Digit('4'));
        let after = SessionSnapshot::from_session(&session);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("buffer: ___-____ → 4__-____"));
        assert!(diff.contains("caret: [0,0] → [1,1]"));
    }
}
