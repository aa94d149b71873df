//! Wondercard CLI - Command-line tool for Generation III distribution records.
//!
//! This is the main entry point for the Wondercard command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use serde::Serialize;
use walkdir::WalkDir;

use wondercard::prelude::*;

/// Wondercard - Generation III card and news record tool
#[derive(Parser)]
#[command(name = "wondercard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the contents of a record
    Info {
        /// Input record (.wc3 or .wn3)
        #[arg(short, long, env = "WONDERCARD_INPUT")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit fields of a record
    Edit {
        /// Input record
        #[arg(short, long, env = "WONDERCARD_INPUT")]
        input: PathBuf,

        /// Output record
        #[arg(short, long)]
        output: PathBuf,

        /// Text slot to write (pairs with --text, repeatable)
        #[arg(long = "slot")]
        slots: Vec<usize>,

        /// Text to write into the matching --slot
        #[arg(long = "text")]
        texts: Vec<String>,

        /// Color (display group for cards, raw value for news)
        #[arg(long)]
        color: Option<u8>,

        /// Distribution permission
        #[arg(long, value_enum)]
        distribution: Option<DistributionArg>,

        /// Card icon id
        #[arg(long)]
        icon: Option<u16>,

        /// Clear all text before writing slots
        #[arg(long)]
        clear_text: bool,

        /// Zero garbage after the end of the card script
        #[arg(long)]
        clean_trash: bool,

        /// Do not recompute checksums
        #[arg(long)]
        no_fix: bool,
    },

    /// Recompute the checksums of a record
    Fix {
        /// Input record
        #[arg(short, long, env = "WONDERCARD_INPUT")]
        input: PathBuf,

        /// Output record (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the event script of a card
    ExportScript {
        /// Input card
        #[arg(short, long, env = "WONDERCARD_INPUT")]
        input: PathBuf,

        /// Output script file
        #[arg(short, long)]
        output: PathBuf,

        /// Write a relocated image for script editors
        #[arg(short, long)]
        relocate: bool,
    },

    /// Replace the event script of a card
    ImportScript {
        /// Input card
        #[arg(short, long, env = "WONDERCARD_INPUT")]
        input: PathBuf,

        /// Script file
        #[arg(short, long)]
        script: PathBuf,

        /// Output card
        #[arg(short, long)]
        output: PathBuf,

        /// Read the script from a relocated image
        #[arg(short, long)]
        relocate: bool,
    },

    /// Check the checksums of every record in a directory
    Scan {
        /// Directory to walk
        #[arg(short, long)]
        dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DistributionArg {
    None,
    Allowed,
    Restricted,
}

impl From<DistributionArg> for Distribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::None => Distribution::None,
            DistributionArg::Allowed => Distribution::Allowed,
            DistributionArg::Restricted => Distribution::Restricted,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info { input, json } => {
            cmd_info(&input, json)?;
        }
        Commands::Edit {
            input,
            output,
            slots,
            texts,
            color,
            distribution,
            icon,
            clear_text,
            clean_trash,
            no_fix,
        } => {
            let edits = Edits {
                slots,
                texts,
                color,
                distribution: distribution.map(Into::into),
                icon,
                clear_text,
                clean_trash,
                fix: !no_fix,
            };
            cmd_edit(&input, &output, edits)?;
        }
        Commands::Fix { input, output } => {
            let output = output.unwrap_or_else(|| input.clone());
            cmd_fix(&input, &output)?;
        }
        Commands::ExportScript {
            input,
            output,
            relocate,
        } => {
            cmd_export_script(&input, &output, relocate)?;
        }
        Commands::ImportScript {
            input,
            script,
            output,
            relocate,
        } => {
            cmd_import_script(&input, &script, &output, relocate)?;
        }
        Commands::Scan { dir } => {
            cmd_scan(&dir)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load(path: &Path) -> Result<Record> {
    Record::from_file(path).with_context(|| format!("Failed to read record {}", path.display()))
}

/// Summary of a record for display.
#[derive(Serialize)]
struct RecordInfo {
    shape: RecordShape,
    locale: Locale,
    exportable: bool,
    distribution: Distribution,
    color: u8,
    color_group: u8,
    icon: Option<u16>,
    texts: Vec<String>,
    script_header: Option<ScriptHeader>,
    script_address: Option<u32>,
    checksums: ChecksumReport,
}

impl RecordInfo {
    fn new(record: &Record) -> Self {
        Self {
            shape: record.shape(),
            locale: record.locale(),
            exportable: record.is_exportable(),
            distribution: record.distribution(),
            color: record.color(),
            color_group: record.color_group(),
            icon: record.icon().ok(),
            texts: record.texts().collect(),
            script_header: record.script_header().ok(),
            script_address: script::script_address(record).ok(),
            checksums: record.verify(),
        }
    }
}

fn cmd_info(input: &Path, json: bool) -> Result<()> {
    let record = load(input)?;
    let info = RecordInfo::new(&record);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} ({}, {} bytes)", input.display(), info.shape, record.data().len());
    println!(
        "Distribution: {:?}, color {:#04x} (group {})",
        info.distribution, info.color, info.color_group
    );
    if let Some(icon) = info.icon {
        println!("Icon: {}", icon);
    }

    for (index, text) in info.texts.iter().enumerate() {
        println!("  [{:>2}] {}", index, text);
    }

    if let Some(header) = info.script_header {
        println!(
            "Script: id {:#04x}, map {}.{}, NPC {}",
            header.id, header.map_bank, header.map_number, header.npc
        );
    }
    if let Some(address) = info.script_address {
        println!("Script address: {:#x}", address);
    }

    let checksums = info.checksums;
    println!(
        "Header checksum: {:#06x} (computed {:#06x}) {}",
        checksums.header.stored,
        checksums.header.computed,
        status_label(checksums.header.is_valid())
    );
    if let Some(script) = checksums.script {
        println!(
            "Script checksum: {:#06x} (computed {:#06x}) {}",
            script.stored,
            script.computed,
            status_label(script.is_valid())
        );
    }

    Ok(())
}

fn status_label(valid: bool) -> &'static str {
    if valid {
        "OK"
    } else {
        "MISMATCH"
    }
}

struct Edits {
    slots: Vec<usize>,
    texts: Vec<String>,
    color: Option<u8>,
    distribution: Option<Distribution>,
    icon: Option<u16>,
    clear_text: bool,
    clean_trash: bool,
    fix: bool,
}

fn cmd_edit(input: &Path, output: &Path, edits: Edits) -> Result<()> {
    if edits.slots.len() != edits.texts.len() {
        anyhow::bail!(
            "--slot and --text must be given the same number of times ({} vs {})",
            edits.slots.len(),
            edits.texts.len()
        );
    }

    let mut record = load(input)?;

    if edits.clear_text {
        record.clear_text();
    }

    for (&slot, text) in edits.slots.iter().zip(&edits.texts) {
        record
            .set_text(slot, text)
            .with_context(|| format!("Failed to write text slot {}", slot))?;
    }

    if edits.color.is_some() || edits.distribution.is_some() {
        let color = edits.color.unwrap_or_else(|| match record.shape().kind() {
            RecordKind::Card => record.color_group(),
            RecordKind::News => record.color(),
        });
        let distribution = edits.distribution.unwrap_or_else(|| record.distribution());
        record.set_color_distribution(color, distribution);
    }

    if let Some(icon) = edits.icon {
        record.set_icon(icon).context("Failed to set icon")?;
    }

    if edits.clean_trash {
        let cleared = record
            .clean_trailing_trash()
            .context("Failed to clean script")?;
        log::info!("cleared {} trailing script bytes", cleared);
    }

    if edits.fix {
        record.fix_checksums();
    }

    log::info!("{} bytes changed", record.changed_offsets().count());
    record
        .write_to_file(output)
        .context("Failed to write output file")?;

    println!("Written {}", output.display());

    Ok(())
}

fn cmd_fix(input: &Path, output: &Path) -> Result<()> {
    let mut record = load(input)?;
    let before = record.verify();
    record.fix_checksums();

    if before.is_valid() {
        println!("Checksums already valid");
    } else {
        println!("Checksums fixed");
    }

    record
        .write_to_file(output)
        .context("Failed to write output file")?;

    Ok(())
}

fn cmd_export_script(input: &Path, output: &Path, relocate: bool) -> Result<()> {
    let record = load(input)?;

    let bytes = if relocate {
        let address = script::script_address(&record).context("Record has no script")?;
        println!("Open the script at address {:#x}", address);
        script::extract_relocatable(&record)?
    } else {
        record.script().context("Record has no script")?.to_vec()
    };

    fs::write(output, bytes).context("Failed to write output file")?;
    println!("Script written to {}", output.display());

    Ok(())
}

fn cmd_import_script(input: &Path, script_path: &Path, output: &Path, relocate: bool) -> Result<()> {
    let mut record = load(input)?;
    let data = fs::read(script_path).context("Failed to read script file")?;

    if relocate {
        record
            .import_relocatable(&data)
            .context("Failed to import relocated script")?;
    } else {
        record.set_script(&data).context("Failed to import script")?;
    }

    record.fix_checksums();
    record
        .write_to_file(output)
        .context("Failed to write output file")?;

    println!("Script imported into {}", output.display());

    Ok(())
}

fn cmd_scan(dir: &Path) -> Result<()> {
    let files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .and_then(RecordKind::from_extension)
                .is_some()
        })
        .collect();

    println!("Scanning {} records in {}...", files.len(), dir.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let mut valid = 0;
    let mut mismatched = 0;
    let mut errors = 0;

    for path in &files {
        match Record::from_file(path) {
            Ok(record) if record.verify().is_valid() => valid += 1,
            Ok(record) => {
                pb.println(format!("MISMATCH {} ({})", path.display(), record.shape()));
                mismatched += 1;
            }
            Err(e) => {
                pb.println(format!("ERROR {}: {}", path.display(), e));
                errors += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!(
        "Scanned in {:?}: {} valid, {} mismatched, {} errors",
        start.elapsed(),
        valid,
        mismatched,
        errors
    );

    Ok(())
}
