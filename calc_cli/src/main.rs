//! # Scaffold Takeoff CLI
//!
//! Command-line front-end for the takeoff engine.
//!
//! ## Commands
//!
//! - `calc_cli facade --length 14 --width 5 --height 13 --levels 2 --ladder`
//!   computes a facade takeoff from flags (JSON, text, and optionally PDF)
//! - `calc_cli request [PATH]` answers a JSON request body read from a file
//!   or stdin with the JSON response, the same contract a web endpoint uses
//!
//! Logs go to stderr and are controlled by `-v` or `RUST_LOG`, so stdout
//! only ever carries the response.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use calc_core::api::{generate_json, GenerateResponse};
use calc_core::calculations::facade::{compute, FacadeInput};
use calc_core::pdf::render_takeoff_pdf;
use calc_core::report::{render_text, ReportMeta};
use calc_core::{CalcError, CalcResult};

/// Scaffold material takeoff
#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(about = "Bill of materials for facade scaffolds", long_about = None)]
#[command(version)]
struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a facade scaffold takeoff
    Facade {
        /// Facade length (ft)
        #[arg(long, allow_negative_numbers = true)]
        length: f64,

        /// Deck width (ft)
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        /// Scaffold height (ft)
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Number of working (decked) levels
        #[arg(long, default_value_t = 0)]
        levels: u32,

        /// Add a ladder access bay on every working level
        #[arg(long)]
        ladder: bool,

        /// Output format on stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Also write a PDF material list to this path
        #[arg(long)]
        pdf: Option<PathBuf>,

        #[command(flatten)]
        meta: MetaArgs,
    },

    /// Answer a JSON takeoff request
    Request {
        /// Request body file; stdin when omitted or "-"
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct MetaArgs {
    /// Name printed as "Prepared by" on reports
    #[arg(long)]
    prepared_by: Option<String>,

    /// Job or site reference printed on reports
    #[arg(long)]
    job_id: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Response JSON (summary + ordered materials)
    Json,
    /// Aligned plain-text list
    Text,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Facade {
            length,
            width,
            height,
            levels,
            ladder,
            format,
            pdf,
            meta,
        } => {
            let input = match facade_input(length, width, height, levels, ladder) {
                Ok(input) => input,
                Err(e) => {
                    report_error(&e);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let result = compute(&input);
            let meta = ReportMeta::new(meta.prepared_by, meta.job_id);

            match format {
                OutputFormat::Json => {
                    let response = GenerateResponse::from(result.clone());
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                OutputFormat::Text => {
                    print!("{}", render_text(&result.summary, &result.materials, &meta));
                }
            }

            if let Some(path) = pdf {
                let bytes = render_takeoff_pdf(&result, &meta)?;
                fs::write(&path, bytes)
                    .with_context(|| format!("writing PDF to {}", path.display()))?;
                info!(path = %path.display(), "wrote PDF material list");
            }

            Ok(ExitCode::SUCCESS)
        }
        Commands::Request { path } => {
            let body = read_body(path.as_deref())?;
            match generate_json(&body) {
                Ok(response) => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    report_error(&e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// Typed facade input from command-line flags, validated like a request.
fn facade_input(length: f64, width: f64, height: f64, levels: u32, ladder: bool) -> CalcResult<FacadeInput> {
    let input = FacadeInput {
        length_ft: length,
        width_ft: width,
        height_ft: height,
        working_levels: levels,
        include_ladder: ladder,
    };
    input.validate()?;
    Ok(input)
}

/// Read a request body from `path`, or stdin for `None` / `-`.
fn read_body(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("reading request from {}", p.display()))
        }
        _ => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            Ok(body)
        }
    }
}

/// Print a calculation error for humans, then as JSON for programs.
fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("{}", json);
    }
}
