//! Command-line orchestrator for destructive sampling.
//!
//! Previews are the default; execution is gated behind the confirmation
//! phrase and can be preceded by a backup snapshot. The core library does
//! the enumeration, sampling and removal; this binary only sequences it.

mod progress;

use clap::{Parser, Subcommand};
use decimator::{ContentMode, ExtensionFilter, Plan};
use progress::BarReporter;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "decimate")]
#[command(version, about = "Randomly remove a percentage of files or document content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decimate files in a folder (reversible: moved to trash)
    Folder {
        /// Folder holding the candidate files
        folder: PathBuf,

        /// Percentage of candidates to remove (0-100)
        #[arg(short, long)]
        strength: u8,

        /// Restrict candidates by extension, e.g. --ext png,jpg
        #[arg(long, value_delimiter = ',')]
        ext: Vec<String>,

        /// Perform the removal instead of previewing
        #[arg(long)]
        execute: bool,

        /// Confirmation phrase; required to execute
        #[arg(long)]
        confirm: Option<String>,

        /// Back up every current candidate into this directory first
        #[arg(long)]
        backup_dir: Option<PathBuf>,

        /// Output the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decimate a document's lines or characters (permanent in-place edit)
    Content {
        /// Document to rewrite
        file: PathBuf,

        /// Percentage of units to remove (0-100)
        #[arg(short, long)]
        strength: u8,

        /// Unit granularity: lines, chars
        #[arg(long, default_value = "lines")]
        mode: String,

        /// Perform the rewrite instead of previewing
        #[arg(long)]
        execute: bool,

        /// Confirmation phrase; required to execute
        #[arg(long)]
        confirm: Option<String>,

        /// Back up the document into this directory first
        #[arg(long)]
        backup_dir: Option<PathBuf>,

        /// Output the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Folder {
            folder,
            strength,
            ext,
            execute,
            confirm,
            backup_dir,
            json,
        } => handle_folder(folder, strength, ext, execute, confirm, backup_dir, json),
        Commands::Content {
            file,
            strength,
            mode,
            execute,
            confirm,
            backup_dir,
            json,
        } => handle_content(file, strength, mode, execute, confirm, backup_dir, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn handle_folder(
    folder: PathBuf,
    strength: u8,
    ext: Vec<String>,
    execute: bool,
    confirm: Option<String>,
    backup_dir: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if ext.is_empty() {
        ExtensionFilter::All
    } else {
        ExtensionFilter::only(&ext)
    };

    if !execute {
        let plan = decimator::plan_folder(&folder, strength, &filter)?;
        print_plan(&plan, "files", json, true)?;
        return Ok(());
    }

    check_confirmation(confirm)?;

    if let Some(dir) = backup_dir {
        // Execution draws its own sample, so every current candidate is a
        // potential target and all of them get snapshotted.
        let candidates = decimator::folder::list_candidates(&folder, &filter)?;
        let dest = decimator::backup_files(&candidates, &dir)?;
        info!("backup created: {}", dest.display());
        println!("Backup created: {}", dest.display());
    }

    let reporter = BarReporter::new("Trashing");
    let stats = decimator::decimate_folder(&folder, strength, &filter, &reporter)?;
    reporter.finish();

    println!("Moved to trash: {} | Failed: {}", stats.trashed, stats.failed);
    Ok(())
}

fn handle_content(
    file: PathBuf,
    strength: u8,
    mode: String,
    execute: bool,
    confirm: Option<String>,
    backup_dir: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = match mode.as_str() {
        "lines" => ContentMode::Lines,
        "chars" => ContentMode::Chars,
        other => return Err(format!("unknown mode '{}': use lines or chars", other).into()),
    };

    if !execute {
        let plan = decimator::plan_content(&file, strength, mode)?;
        let unit = match mode {
            ContentMode::Lines => "lines",
            ContentMode::Chars => "chars",
        };
        // the chars preview is a fixed placeholder, not a target listing
        print_plan(&plan, unit, json, mode == ContentMode::Lines)?;
        return Ok(());
    }

    check_confirmation(confirm)?;

    if let Some(dir) = backup_dir {
        let dest = decimator::backup_file(&file, &dir)?;
        info!("backup created: {}", dest.display());
        println!("Backup created: {}", dest.display());
    }

    let reporter = BarReporter::new("Rewriting");
    let stats = decimator::decimate_content(&file, strength, mode, &reporter)?;
    reporter.finish();

    println!("Removed: {} | Kept: {}", stats.removed, stats.kept);
    Ok(())
}

/// Execution gate: the phrase must normalize to the required one.
fn check_confirmation(confirm: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let phrase = confirm.unwrap_or_default();
    if !decimator::confirmation_phrase_ok(&phrase) {
        return Err(format!(
            "refusing to execute: pass --confirm \"{}\"",
            decimator::CONFIRMATION_PHRASE
        )
        .into());
    }
    Ok(())
}

fn print_plan(
    plan: &Plan,
    unit: &str,
    json: bool,
    preview_lists_targets: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!("Candidates: {} {}", plan.total, unit);
    println!("Would remove: {}", plan.to_remove);
    for target in &plan.targets_preview {
        println!("  - {}", target);
    }
    if preview_lists_targets && plan.to_remove > plan.targets_preview.len() {
        println!("  ...and {} more", plan.to_remove - plan.targets_preview.len());
    }
    Ok(())
}
