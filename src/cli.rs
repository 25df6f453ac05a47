//! Command-line interface
//!
//! Supports:
//! - Replaying a key script against a phone entry and printing the result
//! - Printing a month grid

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigError, PhoneEntryConfig};
use crate::control::{EntryCmd, EntryMsg, PhoneEntry};
use crate::keys::KeyCode;
use crate::mask::Caret;

/// Masked phone number input
#[derive(Parser, Debug)]
#[command(name = "phone-mask", version, about = "Masked phone number input")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Replay keys against a masked input and print the resulting state
    Type(TypeArgs),
    /// Print a month grid
    Calendar(CalendarArgs),
}

#[derive(Args, Debug, Default)]
pub struct TypeArgs {
    /// Config file (defaults to ~/.config/phone-mask/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mask template, `_` marks editable slots
    #[arg(short, long)]
    pub template: Option<String>,

    /// Report the value as digits only
    #[arg(short, long)]
    pub numbers_only: bool,

    /// Initial value
    #[arg(short, long, default_value = "")]
    pub initial: String,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Keys to replay: `0`-`9`, `num0`-`num9`, `backspace`, `delete`, `left`,
    /// `right`, other key names, `caret:P` or `select:S-E`
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CalendarArgs {
    pub year: i32,

    /// Month, 1-12
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// First day of the week, 0 = Sunday .. 6 = Saturday
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub first_day: u8,
}

/// One step of a key script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Key(KeyCode),
    /// Place a collapsed caret, as a mouse click would
    Caret(usize),
    /// Select a range, as a mouse drag would
    Select(usize, usize),
}

/// Parse a single script token
pub fn parse_step(token: &str) -> Result<ScriptStep, String> {
    if let Some(pos) = token.strip_prefix("caret:") {
        let pos = pos
            .parse()
            .map_err(|_| format!("Invalid caret position: {}", token))?;
        return Ok(ScriptStep::Caret(pos));
    }

    if let Some(range) = token.strip_prefix("select:") {
        let (start, end) = range
            .split_once('-')
            .ok_or_else(|| format!("Expected select:START-END, got {}", token))?;
        let start = start
            .parse()
            .map_err(|_| format!("Invalid selection start: {}", token))?;
        let end = end
            .parse()
            .map_err(|_| format!("Invalid selection end: {}", token))?;
        return Ok(ScriptStep::Select(start, end));
    }

    token
        .parse::<KeyCode>()
        .map(ScriptStep::Key)
        .map_err(|e| e.to_string())
}

/// Parse every token of a script
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ScriptStep>, String> {
    tokens.iter().map(|t| parse_step(t.as_ref())).collect()
}

/// Caret a native text input would report after an arrow key
fn native_arrow_caret(key: KeyCode, caret: Caret, len: usize) -> Caret {
    match key {
        KeyCode::Left if caret.is_collapsed() => Caret::collapsed(caret.start.saturating_sub(1)),
        KeyCode::Left => Caret::collapsed(caret.start),
        KeyCode::Right if caret.is_collapsed() => Caret::collapsed((caret.end + 1).min(len)),
        KeyCode::Right => Caret::collapsed(caret.end),
        _ => caret,
    }
}

/// Feed a script into a phone entry, returning the commands it produced
pub fn replay(entry: &mut PhoneEntry, steps: &[ScriptStep]) -> Vec<EntryCmd> {
    let len = entry.session().template().len();
    let mut cmds = Vec::new();

    for step in steps {
        let msg = match *step {
            ScriptStep::Key(key) => {
                let caret = native_arrow_caret(key, entry.session().caret(), len);
                EntryMsg::Key { key, caret }
            }
            ScriptStep::Caret(pos) => EntryMsg::Navigate(Caret::new(pos, pos, len)),
            ScriptStep::Select(start, end) => EntryMsg::Navigate(Caret::new(start, end, len)),
        };
        cmds.extend(entry.update(msg));
    }

    cmds
}

impl TypeArgs {
    /// Resolve the entry config: file (explicit or default) plus CLI overrides
    pub fn entry_config(&self) -> Result<PhoneEntryConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PhoneEntryConfig::load_from_path(path)?,
            None => PhoneEntryConfig::load(),
        };

        if let Some(template) = &self.template {
            config.template = template.clone();
        }
        if self.numbers_only {
            config.numbers_only = true;
        }
        config.build_template()?;
        Ok(config)
    }
}
