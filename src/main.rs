//! folio - build ordered image galleries from a folder tree.
//!
//! Usage:
//!   folio build DIR -s gallery.yaml   Print the gallery for a settings block
//!   folio settings gallery.yaml       Show the parsed settings
//!   folio --help                      Show help

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use folio_core::{FileNode, GallerySettings, Node, Platform, Vault};
use folio_gallery::build_gallery;
use folio_scan::{DiskScanner, ScanConfig};

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Select, filter, order and group images for a gallery",
    long_about = "folio walks a folder tree, keeps the image files, and orders them \
                  the way a gallery settings block asks for.\n\n\
                  The directory given to `build` is treated as the vault root; \
                  the `path` setting is resolved inside it."
)]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the gallery described by a settings block
    Build {
        /// Vault root directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// YAML settings block
        #[arg(short, long, value_name = "FILE")]
        settings: PathBuf,

        /// Apply mobile column defaults
        #[arg(long)]
        mobile: bool,

        /// Include hidden files and folders
        #[arg(long)]
        hidden: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Parse a settings block and print the result
    Settings {
        /// YAML settings block
        file: PathBuf,

        /// Apply mobile column defaults
        #[arg(long)]
        mobile: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("folio={level}").parse()?)
        .add_directive(format!("folio_scan={level}").parse()?)
        .add_directive(format!("folio_gallery={level}").parse()?);
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Build {
            dir,
            settings,
            mobile,
            hidden,
            format,
        } => {
            run_build(&dir, &settings, platform(mobile), hidden, format)?;
        }
        Command::Settings { file, mobile } => {
            run_settings(&file, platform(mobile))?;
        }
    }

    Ok(())
}

fn platform(mobile: bool) -> Platform {
    if mobile {
        Platform::Mobile
    } else {
        Platform::Desktop
    }
}

/// Read and parse a settings block.
fn load_settings(file: &Path, platform: Platform) -> Result<GallerySettings> {
    let src = std::fs::read_to_string(file)
        .with_context(|| format!("reading settings from {}", file.display()))?;
    let settings = GallerySettings::from_yaml(&src, platform)
        .with_context(|| format!("parsing settings from {}", file.display()))?;
    Ok(settings)
}

/// Scan the vault and print the gallery.
fn run_build(
    dir: &Path,
    settings_file: &Path,
    platform: Platform,
    hidden: bool,
    format: OutputFormat,
) -> Result<()> {
    let settings = load_settings(settings_file, platform)?;

    let config = ScanConfig::builder()
        .root(dir)
        .include_hidden(hidden)
        .build()
        .context("Invalid scan configuration")?;
    let vault = DiskScanner::new()
        .scan_vault(&config)
        .context("Scan failed")?;
    info!(root = %dir.display(), path = %settings.path, "vault scanned");

    let records = build_gallery(&vault, &settings.path, &settings)?;

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(70));
            println!(
                " {} - {} images (sort by {} {}, group by {})",
                settings.path,
                records.len(),
                settings.sort_by,
                settings.direction,
                settings.group_by
            );
            println!("{}", "─".repeat(70));
            println!();

            for record in &records {
                let stat_line = vault
                    .resolve(&folio_core::path::join(&record.folder, &record.name))
                    .and_then(Node::as_file)
                    .map(describe)
                    .unwrap_or_default();
                println!(
                    " {:<40} {:<20} {}",
                    truncate(&record.name, 40),
                    truncate(&record.folder, 20),
                    stat_line
                );
            }
            println!();
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

/// Print parsed settings as JSON.
fn run_settings(file: &Path, platform: Platform) -> Result<()> {
    let settings = load_settings(file, platform)?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Size and creation time of a file, for the text table.
fn describe(file: &FileNode) -> String {
    let size = file
        .stat
        .size
        .map(format_size)
        .unwrap_or_else(|| "-".to_string());
    let created = file
        .stat
        .created
        .map(format_time)
        .unwrap_or_else(|| "-".to_string());
    format!("{size:>10}  {created}")
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Format a timestamp in local time.
fn format_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Truncate a string to max length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}
