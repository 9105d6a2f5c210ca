//! pdfsnap - snapshot testing for PDF documents.
//!
//! This is the main entry point for the pdfsnap CLI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pdfsnap_snapshot::{
    compare, naming, ComparisonRequest, DiffPdf, SnapshotConfig, UpdateMode,
    COMMAND_NOT_FOUND_STATUS,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "pdfsnap")]
#[command(author, version, about = "Snapshot testing for PDF documents", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project directory containing pdfsnap.json (defaults to the current directory)
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a document against its stored snapshot
    Compare {
        /// Document to compare
        document: PathBuf,
        /// Snapshot name (defaults to the document's file stem)
        #[arg(short, long)]
        identifier: Option<String>,
        /// Directory holding snapshots
        #[arg(short, long)]
        snapshot_dir: Option<PathBuf>,
        /// Overwrite the snapshot with the document (same as --update-mode all)
        #[arg(short, long, conflicts_with_all = ["add", "update_mode"])]
        update: bool,
        /// Write the snapshot only if none exists (same as --update-mode new)
        #[arg(short, long, conflicts_with = "update_mode")]
        add: bool,
        /// Snapshot write policy: all, new or none
        #[arg(long)]
        update_mode: Option<String>,
        /// Document file extension
        #[arg(long, default_value = "pdf")]
        extension: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether diff-pdf is installed
    Check,
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project_dir = match cli.project {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = SnapshotConfig::load(Some(&project_dir))
        .await
        .context("Failed to load configuration")?;
    debug!(update = config.update.as_str(), "Loaded configuration");

    match cli.command {
        Commands::Compare {
            document,
            identifier,
            snapshot_dir,
            update,
            add,
            update_mode,
            extension,
            json,
        } => {
            let mode = resolve_update_mode(&config, update, add, update_mode.as_deref())?;
            let request =
                build_request(&config, document, identifier, snapshot_dir, mode, extension)?;
            run_compare(&config, &request, json).await
        }
        Commands::Check => run_check(&config).await,
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Pick the update mode: `--update`, then `--add`, then `--update-mode`, then configuration.
fn resolve_update_mode(
    config: &SnapshotConfig,
    update: bool,
    add: bool,
    update_mode: Option<&str>,
) -> anyhow::Result<UpdateMode> {
    if update {
        return Ok(UpdateMode::All);
    }
    if add {
        return Ok(UpdateMode::New);
    }
    match update_mode {
        Some(mode) => Ok(mode.parse()?),
        None => Ok(config.update),
    }
}

/// Build the comparison request from configuration and command line flags.
fn build_request(
    config: &SnapshotConfig,
    document: PathBuf,
    identifier: Option<String>,
    snapshot_dir: Option<PathBuf>,
    mode: UpdateMode,
    extension: String,
) -> anyhow::Result<ComparisonRequest> {
    let identifier = match identifier {
        Some(identifier) => identifier,
        None => document
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .with_context(|| format!("Cannot derive a snapshot name from {}", document.display()))?,
    };
    let snapshot_dir = snapshot_dir
        .or_else(|| config.snapshot_dir.clone())
        .unwrap_or_else(|| naming::default_snapshot_dir(&document));

    Ok(ComparisonRequest::new(document, snapshot_dir, identifier)
        .with_update_snapshot(mode.update_snapshot())
        .with_add_snapshot(mode.add_snapshot())
        .with_extension(extension))
}

async fn run_compare(
    config: &SnapshotConfig,
    request: &ComparisonRequest,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let diff_pdf = DiffPdf::new(config.diff_pdf.clone());
    let result = compare(request, &diff_pdf)
        .await
        .with_context(|| format!("Failed to compare {}", request.document_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}: {}", request.snapshot_identifier, result);
    }

    Ok(if result.pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_check(config: &SnapshotConfig) -> anyhow::Result<ExitCode> {
    let binary = &config.diff_pdf.binary;
    let status = DiffPdf::new(config.diff_pdf.clone()).probe_status().await?;

    if status == COMMAND_NOT_FOUND_STATUS {
        println!("diff-pdf not found ({})", binary.display());
        return Ok(ExitCode::FAILURE);
    }

    println!("diff-pdf available ({})", binary.display());
    Ok(ExitCode::SUCCESS)
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "pdfsnap=debug,pdfsnap_snapshot=debug"
    } else {
        "pdfsnap=info,pdfsnap_snapshot=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
