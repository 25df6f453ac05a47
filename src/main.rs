use anyhow::{anyhow, Context, Result};
use clap::Parser;

use phone_mask::calendar::{weekday_from_sunday_index, Calendar};
use phone_mask::cli::{parse_script, replay, CalendarArgs, CliArgs, CliCommand, TypeArgs};
use phone_mask::PhoneEntry;

fn run_type(args: TypeArgs) -> Result<()> {
    let config = args.entry_config().context("Failed to load phone entry config")?;
    let steps = parse_script(&args.keys).map_err(|e| anyhow!(e))?;

    let mut entry = PhoneEntry::new(config, &args.initial)?;
    let cmds = replay(&mut entry, &steps);
    tracing::debug!(count = cmds.len(), "replayed {} steps", steps.len());

    let state = entry.state();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    let caret = state.caret;
    println!("label:  {}", entry.label());
    println!("buffer: {}", state.buffer);
    println!("caret:  [{}, {}]", caret.start, caret.end);
    println!("value:  {}", state.value);
    match state.error {
        None => println!("valid:  yes"),
        Some(e) => println!("valid:  no ({})", e),
    }
    Ok(())
}

fn run_calendar(args: CalendarArgs) -> Result<()> {
    let first_day = weekday_from_sunday_index(args.first_day)
        .ok_or_else(|| anyhow!("Invalid first week day: {}", args.first_day))?;
    let calendar = Calendar::new(first_day);
    let text = calendar
        .month_text(args.year, args.month - 1)
        .with_context(|| format!("Failed to build calendar for {}-{:02}", args.year, args.month))?;
    println!("{}", text);
    Ok(())
}

fn main() -> Result<()> {
    phone_mask::tracing::init();

    let args = CliArgs::parse();
    match args.command {
        CliCommand::Type(args) => run_type(args),
        CliCommand::Calendar(args) => run_calendar(args),
    }
}
