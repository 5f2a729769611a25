#![allow(missing_docs)]

//! notekeep CLI.
//!
//! Logging: set `RUST_LOG=notekeep=debug` (or `warn`) to change what reaches
//! stderr. Command results go to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use notekeep::Settings;
use notekeep_frontmatter::{InjectReport, inject_folder};
use notekeep_imagecheck::{ReconcileSummary, reconcile, write_report};

#[derive(Parser, Debug)]
#[command(
    name = "notekeep",
    about = "Maintenance commands for plain-text note folders",
    arg_required_else_help = true
)]
struct Cli {
    /// Settings file (YAML). Overrides `$NOTEKEEP_CONFIG` and the per-user default.
    #[arg(long = "conf", short = 'c', value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    /// Log per-file detail.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prepend a YAML header to every note in a folder that lacks one.
    Frontmatter {
        /// Folder to process (not recursive).
        #[arg(long, value_name = "DIR")]
        folder: Option<String>,
        /// Category written into `categories: [...]`.
        #[arg(long)]
        category: Option<String>,
        /// Author name.
        #[arg(long)]
        author: Option<String>,
        /// Layout name.
        #[arg(long)]
        layout: Option<String>,
        /// Note extension to process (repeatable).
        #[arg(long = "extension", value_name = "EXT")]
        extensions: Vec<String>,
    },
    /// Check pasted-image links against images on disk and write a report.
    Imagecheck {
        /// Folder to reconcile (repeatable, replaces the configured list).
        #[arg(long = "folder", value_name = "DIR")]
        folders: Vec<String>,
        /// Images subfolder name.
        #[arg(long = "images-dir", value_name = "NAME")]
        images_dir: Option<String>,
        /// Report file.
        #[arg(long, value_name = "FILE")]
        report: Option<String>,
    },
    /// Print the effective settings as YAML.
    Config,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Pretty,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Prefix match also covers the notekeep_* library targets.
        EnvFilter::new(if verbose {
            "notekeep=debug"
        } else {
            "notekeep=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn emit_json<T: Serialize>(value: &T, output: OutputFormat) -> Result<()> {
    let rendered = match output {
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string(value),
    }
    .context("failed to serialize CLI output as JSON")?;
    println!("{rendered}");
    Ok(())
}

fn print_inject_report(report: &InjectReport, category: &str, output: OutputFormat) -> Result<()> {
    if output != OutputFormat::Text {
        return emit_json(&json!({ "category": category, "report": report }), output);
    }
    println!("Folder: {}", report.folder.display());
    println!("Category: {category}");
    println!("Files found: {}", report.total);
    println!("Files processed: {}", report.processed);
    println!("Files skipped: {}", report.skipped);
    for failure in &report.failures {
        println!("  failed: {} ({})", failure.path.display(), failure.error);
    }
    Ok(())
}

fn print_reconcile_summary(
    report_path: &std::path::Path,
    summary: &ReconcileSummary,
    output: OutputFormat,
) -> Result<()> {
    if output != OutputFormat::Text {
        return emit_json(&json!({ "report": report_path, "summary": summary }), output);
    }
    println!("Results written to {}", report_path.display());
    println!("Total image references found: {}", summary.total_references);
    println!("Images found: {}", summary.found);
    println!("Images missing: {}", summary.missing);
    if summary.missing_folders > 0 {
        println!("Folders not found: {}", summary.missing_folders);
    }
    println!("Total image files: {}", summary.total_assets);
    println!("Referenced images: {}", summary.referenced);
    println!("Orphaned images: {}", summary.orphaned);
    Ok(())
}

fn execute(cli: &Cli, mut settings: Settings) -> Result<()> {
    match &cli.command {
        Command::Frontmatter {
            folder,
            category,
            author,
            layout,
            extensions,
        } => {
            let section = &mut settings.frontmatter;
            if let Some(folder) = folder {
                section.folder.clone_from(folder);
            }
            if let Some(category) = category {
                section.category.clone_from(category);
            }
            if let Some(author) = author {
                section.author.clone_from(author);
            }
            if let Some(layout) = layout {
                section.layout.clone_from(layout);
            }
            if !extensions.is_empty() {
                section.extensions.clone_from(extensions);
            }

            let folder = section.folder_path();
            let options = section.inject_options(settings.max_file_bytes);
            let report = inject_folder(&folder, &options)
                .with_context(|| format!("failed to add frontmatter in {}", folder.display()))?;
            print_inject_report(&report, &options.category, cli.output)
        }
        Command::Imagecheck {
            folders,
            images_dir,
            report,
        } => {
            let section = &mut settings.imagecheck;
            if !folders.is_empty() {
                section.folders.clone_from(folders);
            }
            if let Some(images_dir) = images_dir {
                section.images_dir.clone_from(images_dir);
            }
            if let Some(report) = report {
                section.report.clone_from(report);
            }

            let result = reconcile(
                &section.folder_paths(),
                &section.reconcile_options(settings.max_file_bytes),
            )
            .context("image reconciliation failed")?;
            let report_path = section.report_path();
            write_report(&report_path, &result)?;
            print_reconcile_summary(&report_path, &result.summary(), cli.output)
        }
        Command::Config => match cli.output {
            OutputFormat::Text => {
                let rendered =
                    serde_yaml::to_string(&settings).context("failed to render settings")?;
                print!("{rendered}");
                Ok(())
            }
            OutputFormat::Json | OutputFormat::Pretty => emit_json(&settings, cli.output),
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings =
        Settings::load(cli.config_file.as_deref()).context("failed to load settings")?;
    execute(&cli, settings)
}
