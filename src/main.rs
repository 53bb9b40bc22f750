//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `media_classifier` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use media_classifier::config::{ExportFormat, LogFormat, LogLevel, ParserConfig};
use media_classifier::config::DEFAULT_GLOBAL_MEDIA_FILE;
use media_classifier::dumps::get_unique_urls;
use media_classifier::initialization::{init_logger_with, init_resolver};
use media_classifier::{run_classify, run_sortify, ClassifyOptions};

#[derive(Debug, Parser)]
#[command(name = "media_classifier")]
#[command(about = "Classify media URL lists by registrable domain and annotate crawl hosts")]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a categorized media list into category/url/site records
    Classify {
        /// Media list file
        file: PathBuf,

        /// Flat file injected for a [global] header
        #[arg(long, default_value = DEFAULT_GLOBAL_MEDIA_FILE)]
        global_file: PathBuf,

        /// Accept any section name (disables global loading and collision reports)
        #[arg(long)]
        flexible: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Jsonl)]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Collect and annotate the hosts of every crawl directory under DIR
    Sortify {
        /// Crawl output root
        dir: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the unique hosts of a single raw URL dump
    UniqueUrls {
        /// Dump file (usually `__urls`)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger_with(cli.log_level.clone().into(), cli.log_format.clone()) {
        eprintln!("media_classifier error: {e}");
        process::exit(1);
    }

    if let Err(e) = run(cli.command) {
        eprintln!("media_classifier error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let resolver = init_resolver();

    match command {
        Command::Classify {
            file,
            global_file,
            flexible,
            format,
            output,
        } => {
            let parser = if flexible {
                ParserConfig::flexible()
            } else {
                ParserConfig::strict(global_file)
            };
            let options = ClassifyOptions {
                file,
                parser,
                format,
                output,
            };
            run_classify(&options, &resolver)?;
        }
        Command::Sortify { dir, output } => {
            run_sortify(&dir, output.as_deref(), &resolver)?;
        }
        Command::UniqueUrls { file } => {
            let source = file.parent().map(PathBuf::from).unwrap_or_default();
            let dump = get_unique_urls(&source, &file)
                .with_context(|| format!("Failed to read dump {}", file.display()))?;
            for host in dump.hosts {
                println!("{host}");
            }
        }
    }

    Ok(())
}
