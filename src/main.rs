// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! mstbatch CLI - solve every graph of a batch file and write the trees

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use mstbatch::config::{self, Config};
use mstbatch::display::{DisplayFormat, DisplayMode};
use mstbatch::process::{self, ConsoleOptions};
use mstbatch::writer::OutputLayout;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mstbatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Batch file of graphs to solve
    input: PathBuf,

    /// Destination for the spanning tree results
    output: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "MSTBATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Layout of the results when the batch has several graphs
    #[arg(long, value_enum)]
    layout: Option<OutputLayout>,

    /// Print the first input graph before solving
    #[arg(long)]
    show_graph: bool,

    /// Print every input graph before solving
    #[arg(long, conflicts_with = "show_graph")]
    show_all: bool,

    /// Rendering used for printed graphs
    #[arg(long, value_enum)]
    graph_format: Option<DisplayFormat>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    /// Print a JSON report of all results to stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply(&self, config: &mut Config) {
        if let Some(layout) = self.layout {
            config.output_layout = layout;
        }
        if self.show_all {
            config.display = DisplayMode::All;
        } else if self.show_graph {
            config.display = DisplayMode::First;
        }
        if let Some(format) = self.graph_format {
            config.display_format = format;
        }
    }

    fn log_filter(&self, config: &Config) -> EnvFilter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
        let level = match self.verbose {
            0 if self.quiet => "error",
            0 => config.log_level.as_str(),
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter(&config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let console = ConsoleOptions {
        color: !cli.no_color,
    };
    let summary = process::run(&cli.input, &cli.output, &config, console)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
