//! Command-line front end for movelink.
//!
//! Parses arguments, loads character directories, drives an
//! [`EditingSession`] and writes the destination back.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use movelink_model::store;
use movelink_model::{COMBO_CHART, Character};
use movelink_remap::{
    ChangeReport, EditingSession, RemapConfig, RemapMode, RemapOutcome, RemapWarning, SelectionSet,
};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "movelink", version)]
#[command(about = "Copy move entries between characters, remapping their resource references")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON file with remap settings (name filter, entry labels)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Snapshot source entries into a clipboard file
    Copy(CopyArgs),
    /// Overwrite destination entries with copied ones
    Paste(PasteArgs),
    /// Append copied entries to the destination
    Add(AddArgs),
    /// List the entries of a character
    List(ListArgs),
    /// Print the combo chart of the standard entry layout
    Combos,
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Source character directory
    #[arg(long)]
    pub source: PathBuf,

    /// Source character code, when the directory holds several
    #[arg(long)]
    pub source_code: Option<String>,

    /// Entry indices to copy, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub entries: Vec<u32>,

    /// Clipboard file to write
    #[arg(long)]
    pub clipboard: PathBuf,
}

#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Destination character directory
    #[arg(long)]
    pub dest: PathBuf,

    /// Destination character code, when the directory holds several
    #[arg(long)]
    pub dest_code: Option<String>,

    /// Source character directory
    #[arg(long)]
    pub source: PathBuf,

    /// Source character code, when the directory holds several
    #[arg(long)]
    pub source_code: Option<String>,

    /// Source entry indices to copy, comma separated
    #[arg(long, value_delimiter = ',', required_unless_present = "clipboard")]
    pub entries: Vec<u32>,

    /// Clipboard file written by `copy`, instead of --entries
    #[arg(long, conflicts_with = "entries")]
    pub clipboard: Option<PathBuf>,

    /// Output directory; defaults to the destination directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Character code to save under; defaults to the destination code
    #[arg(long)]
    pub save_code: Option<String>,

    /// Print the change report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PasteArgs {
    #[command(flatten)]
    pub transfer: TransferArgs,

    /// Destination entry indices to overwrite, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub targets: Vec<u32>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub transfer: TransferArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Character directory
    #[arg(long)]
    pub dir: PathBuf,

    /// Character code, when the directory holds several
    #[arg(long)]
    pub code: Option<String>,
}

/// Runs a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RemapConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => RemapConfig::default(),
    };
    match &cli.command {
        Command::Copy(args) => copy(args, out),
        Command::Paste(args) => transfer(&args.transfer, Some(args.targets.as_slice()), config, out),
        Command::Add(args) => transfer(&args.transfer, None, config, out),
        Command::List(args) => list(args, &config, out),
        Command::Combos => {
            out.write_all(COMBO_CHART.as_bytes())?;
            Ok(())
        }
    }
}

/// Loads a character directory. Skipped optional tables are logged by the store.
pub fn load(dir: &Path, code: Option<&str>) -> Result<Character> {
    let code = store::resolve_code(dir, code)
        .with_context(|| format!("Failed to find a character in {}", dir.display()))?;
    let loaded = store::load_character(dir, &code)
        .with_context(|| format!("Failed to load {} from {}", code, dir.display()))?;
    Ok(loaded.character)
}

fn copy(args: &CopyArgs, out: &mut dyn Write) -> Result<()> {
    let source = load(&args.source, args.source_code.as_deref())?;
    let positions = args
        .entries
        .iter()
        .map(|&index| {
            source
                .moveset
                .position_of(index)
                .with_context(|| format!("{} has no entry {}", source.code(), index))
        })
        .collect::<Result<Vec<_>>>()?;
    let selection = SelectionSet::capture(&source, &positions)?;
    fs::write(&args.clipboard, selection.to_clipboard()?)
        .with_context(|| format!("Failed to write {}", args.clipboard.display()))?;
    writeln!(
        out,
        "Copied {} entries from {} ({})",
        selection.len(),
        selection.source_code,
        selection.snapshot_id
    )?;
    Ok(())
}

fn transfer(
    args: &TransferArgs,
    targets: Option<&[u32]>,
    config: RemapConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let destination = load(&args.dest, args.dest_code.as_deref())?;
    let source = load(&args.source, args.source_code.as_deref())?;
    let dest_code = destination.code().to_string();
    let save_code = args.save_code.clone().unwrap_or_else(|| dest_code.clone());
    store::validate_code(&save_code)?;

    let mut session = EditingSession::new(destination, source, config);
    let selection = match &args.clipboard {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read clipboard {}", path.display()))?;
            SelectionSet::from_clipboard(&text)?
        }
        None => session.copy_indices(&args.entries)?,
    };

    let mut outcome = match targets {
        Some(targets) => {
            let positions = session.destination_positions(targets)?;
            session.paste(&selection, &positions)?
        }
        None => session.add(&selection)?,
    };

    let source_code = session.source().code().to_string();
    if args.json {
        let summary = Summary {
            mode: outcome.mode,
            snapshot: outcome.snapshot.map(|id| id.to_string()),
            source: &source_code,
            destination: &dest_code,
            written: &outcome.written,
            report: &outcome.report,
            warnings: &outcome.warnings,
            aborted: outcome.aborted.as_ref().map(ToString::to_string),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write_outcome(out, &outcome, &source_code, &dest_code)?;
    }

    if let Some(err) = outcome.aborted.take() {
        bail!("{} stopped, {} was not saved: {}", outcome.mode, dest_code, err);
    }
    let dir = args.out.as_deref().unwrap_or(&args.dest);
    store::save_character(session.destination(), dir, &save_code)
        .with_context(|| format!("Failed to save {} to {}", save_code, dir.display()))?;
    info!("Wrote {} to {}", save_code, dir.display());
    Ok(())
}

fn list(args: &ListArgs, config: &RemapConfig, out: &mut dyn Write) -> Result<()> {
    let character = load(&args.dir, args.code.as_deref())?;
    writeln!(out, "{}", character.code())?;
    for pos in character.moveset.listed_positions() {
        let entry = &character.moveset.entries[pos];
        writeln!(out, "  {}", config.entry_labels.describe(entry.index))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Summary<'a> {
    mode: RemapMode,
    snapshot: Option<String>,
    source: &'a str,
    destination: &'a str,
    written: &'a [u32],
    report: &'a ChangeReport,
    warnings: &'a [RemapWarning],
    aborted: Option<String>,
}

fn write_outcome(
    out: &mut dyn Write,
    outcome: &RemapOutcome,
    source_code: &str,
    dest_code: &str,
) -> Result<()> {
    let verb = match outcome.mode {
        RemapMode::Paste => "Pasted",
        RemapMode::Add => "Added",
    };
    let written: Vec<String> = outcome.written.iter().map(u32::to_string).collect();
    writeln!(
        out,
        "{} {} entries from {} into {}: {}",
        verb,
        written.len(),
        source_code,
        dest_code,
        written.join(", ")
    )?;
    out.write_all(outcome.report.render(source_code, dest_code).as_bytes())?;
    for warning in &outcome.warnings {
        writeln!(out, "warning: {warning}")?;
    }
    Ok(())
}
