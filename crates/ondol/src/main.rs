//! ondol: CLI for planning serpentine heating pipe layouts.
//!
//! Takes the room dimensions and pipe spacing, validates them, and
//! prints the layout report. Useful for:
//!
//! - Sizing the pipe order for a room before quoting
//! - Comparing spacings by coverage and total pipe length
//! - Producing an SVG install drawing for the fitter
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin ondol -- [OPTIONS] <LENGTH> <WIDTH> <SPACING>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ondol_layout::{LayoutConfig, Verdict, plan, validate};

/// Serpentine pipe layout planner for hydronic radiant floor heating.
///
/// Validates the room geometry, synthesizes the pipe run, and prints
/// grid, coverage, pipe, and path figures for the layout.
#[derive(Parser)]
#[command(name = "ondol", version)]
struct Cli {
    /// Room length in meters (vertical extent).
    length: f64,

    /// Room width in meters (horizontal extent).
    width: f64,

    /// Center-to-center pipe spacing in meters.
    spacing: f64,

    /// Answer yes to advisory prompts (for non-interactive use).
    #[arg(long)]
    yes: bool,

    /// Output the report as JSON instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Write an SVG drawing of the layout to file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = LayoutConfig::new(cli.length, cli.width, cli.spacing);

    // Hard failures stop before any grid work; advisories need an
    // explicit go-ahead from the user.
    match validate(&config) {
        Ok(Verdict::Pass) => {}
        Ok(Verdict::Advisory(advisory)) => {
            eprintln!("Warning: {advisory}");
            if !cli.yes {
                match confirm("Continue? (y/n): ") {
                    Ok(true) => {}
                    Ok(false) => {
                        eprintln!("Operation cancelled.");
                        return ExitCode::FAILURE;
                    }
                    Err(e) => {
                        eprintln!("Error reading confirmation: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    let (layout, report) = match plan(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The synthesizer never yields fewer than two points when the grid
    // succeeded, but a plan nobody can install must not be printed.
    if layout.path.len() < 2 {
        eprintln!("Error: failed to generate a valid pipe path");
        return ExitCode::FAILURE;
    }

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report.report());
    }

    if let Some(ref svg_path) = cli.svg {
        let description = format!(
            "{}m x {}m room at {}m pipe spacing",
            cli.length, cli.width, cli.spacing,
        );
        let config_json = serde_json::to_string(&config).ok();
        let metadata = ondol_export::SvgMetadata {
            title: Some("ondol pipe layout"),
            description: Some(&description),
            config_json: config_json.as_deref(),
        };
        let svg = ondol_export::to_svg(&layout, &config, &metadata);
        match std::fs::write(svg_path, &svg) {
            Ok(()) => {
                eprintln!("SVG written to {} ({} bytes)", svg_path.display(), svg.len());
            }
            Err(e) => {
                eprintln!("Error writing SVG to {}: {e}", svg_path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Print `prompt` to stderr and read one answer line from stdin.
fn confirm(prompt: &str) -> io::Result<bool> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Only `y` and `Y` continue; anything else cancels.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}
