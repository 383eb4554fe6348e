//! CLI entry point for the grade report tool.
//!
//! Provides subcommands for producing a grade report from a directory of
//! student files and for checking which files in it are valid.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grade_report::analyzers::analyzer::{generate_report, validate_candidates};
use grade_report::analyzers::types::ReportOutcome;
use grade_report::config::Settings;
use grade_report::output::{
    RunSummary, append_run_summary, print_json, print_report, write_report,
};
use grade_report::scan::scan_directory;
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_report")]
#[command(about = "A tool to summarize student grade files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a grade report from a directory of student files
    Report {
        /// Directory containing one grade file per student (prompted for if omitted)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// File name of the report written into DIR
        #[arg(long)]
        report_name: Option<String>,

        /// Only print the report, do not write the report file
        #[arg(long, default_value_t = false)]
        no_file: bool,

        /// Print the report facts as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to append a run summary to
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Validate the student files in a directory without building a report
    Check {
        /// Directory containing one grade file per student (prompted for if omitted)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("grade_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    info!("Grade report started");

    match cli.command {
        Commands::Report {
            dir,
            report_name,
            no_file,
            json,
            csv,
        } => {
            let dir = resolve_dir(dir)?;
            let options = settings.scan_options(report_name.as_deref());
            let candidates = scan_directory(&dir, &options)?;
            let report = generate_report(&candidates);

            if let Some(csv_path) = &csv {
                let summary = RunSummary::new(&dir, report.outcome.facts(), report.rejected.len());
                append_run_summary(csv_path, &summary)?;
            }

            match &report.outcome {
                ReportOutcome::NoValidRecords => {
                    warn!(dir = %dir.display(), "No valid grade files found");
                    println!("No valid grade files found in {}.", dir.display());
                }
                ReportOutcome::Facts(facts) => {
                    if json {
                        print_json(facts)?;
                    } else {
                        print_report(facts);
                    }

                    if !no_file {
                        let path = write_report(&dir, &options.report_file_name, facts)?;
                        println!("Report saved to {}", path.display());
                    }
                }
            }
        }
        Commands::Check { dir } => {
            let dir = resolve_dir(dir)?;
            let candidates = scan_directory(&dir, &settings.scan_options(None))?;
            let (records, rejected) = validate_candidates(&candidates);

            for record in &records {
                println!("ok      {}", record.name());
            }
            for rejection in &rejected {
                println!("skipped {}: {}", rejection.identity, rejection.error);
            }
            println!(
                "{} valid, {} skipped, {} scanned",
                records.len(),
                rejected.len(),
                candidates.len()
            );
        }
    }

    info!("Grade report finished");
    Ok(())
}

/// Uses the directory given on the command line, or asks for one on stdin.
fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir);
    }

    print!("Enter the path to the directory with grade files: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read directory path from stdin")?;

    Ok(PathBuf::from(line.trim()))
}
