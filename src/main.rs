//! Polyfleet command line entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  LineInput / ScriptedInput   WriterConsole   LogEventSink      │
//! │  (InputPort)                 (Console)       (EventSink)       │
//! │  JsonFileConfig / BuiltinConfig (ConfigPort)                   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Session (pure logic)                      │    │
//! │  │  FSM · Registry · Catalog                              │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use tracing_subscriber::EnvFilter;

use polyfleet::adapters::console::{LineInput, WriterConsole};
use polyfleet::adapters::json_file::{BuiltinConfig, JsonFileConfig};
use polyfleet::adapters::log_sink::LogEventSink;
use polyfleet::app::ports::{ConfigPort, Console};
use polyfleet::app::service::Session;
use polyfleet::app::showcase::showcase;
use polyfleet::catalog::{Catalog, Fleet};
use polyfleet::config::CatalogConfig;
use polyfleet::cli::{Args, Command};
use polyfleet::error::FileError;
use polyfleet::transcribe;
use polyfleet::vehicle::parade;

fn main() -> Result<()> {
    let args = Args::parse();

    // `log` records from the library reach this subscriber through
    // tracing-log.  Logs go to stderr; stdout carries menu output only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("polyfleet {} starting", env!("CARGO_PKG_VERSION"));

    let mut console = WriterConsole::stdout();
    match args.command() {
        Command::Explore { script } => {
            let fleet = load_fleet(args.catalog.as_deref())?;
            explore(fleet, script.as_deref(), &mut console)
        }
        Command::Parade => {
            let fleet = load_fleet(args.catalog.as_deref())?;
            for step in parade(&fleet.vehicles) {
                console.write_line(&format!("--- #{} ---", step.position));
                for line in step.lines() {
                    console.write_line(&line);
                }
            }
            Ok(())
        }
        Command::Devices => {
            let config = load_config(args.catalog.as_deref())?;
            let Fleet { handsets, .. } = Catalog::builtin().build(&config)?;
            for mut handset in handsets {
                for line in showcase(&mut handset, &config.default_credential) {
                    console.write_line(&line);
                }
                console.write_line("");
            }
            Ok(())
        }
        Command::Transcribe { input, output } => {
            let summary = transcribe::transcribe_file(&input, &output)?;
            console.write_line(&format!(
                "Wrote {} lines to {}",
                summary.lines,
                summary.output.display()
            ));
            console.write_line("Preview:");
            console.write_line(&"-".repeat(40));
            console.write_line(&summary.preview);
            Ok(())
        }
        Command::Inspect {
            paths,
            search,
            save_stats,
        } => inspect(&paths, search.as_deref(), save_stats, &mut console),
    }
}

// ── Catalog ───────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<CatalogConfig> {
    let config = match path {
        Some(p) => JsonFileConfig::new(p).load(),
        None => BuiltinConfig.load(),
    };
    config.context("loading catalog")
}

fn load_fleet(path: Option<&Path>) -> Result<Fleet> {
    let config = load_config(path)?;
    Catalog::builtin()
        .build(&config)
        .context("building catalog")
}

// ── Subcommands ───────────────────────────────────────────────

fn explore(fleet: Fleet, script: Option<&Path>, console: &mut impl Console) -> Result<()> {
    let mut sink = LogEventSink::new();

    let summary = match script {
        Some(p) => {
            let file = File::open(p).map_err(|e| FileError::from_io(p, &e))?;
            let mut input = LineInput::new(BufReader::new(file));
            Session::new(fleet.vehicles)
                .with_echo(true)
                .run(&mut input, console, &mut sink)
        }
        None => Session::new(fleet.vehicles).run(&mut LineInput::stdin(), console, &mut sink),
    };
    info!(
        "session ended: {} lines, {} rejected, {} actions, exited={}",
        summary.inputs, summary.rejected, summary.actions, summary.exited
    );
    Ok(())
}

fn inspect(
    paths: &[PathBuf],
    search: Option<&str>,
    save_stats: bool,
    console: &mut impl Console,
) -> Result<()> {
    let mut failures = 0usize;
    for path in paths {
        let report = match transcribe::inspect_file(path) {
            Ok(r) => r,
            Err(e) => {
                failures += 1;
                console.write_line(&format!("Error: {e}"));
                continue;
            }
        };

        console.write_line(&format!("Successfully opened '{}'", path.display()));
        console.write_line(&format!("File size: {} characters", report.chars));
        console.write_line(&format!("Number of lines: {}", report.lines));
        console.write_line(&format!("Total words: {}", report.words));
        console.write_line(&format!("First {} lines:", transcribe::HEAD_LINES));
        console.write_line(&"-".repeat(40));
        for (i, line) in report.head.iter().enumerate() {
            console.write_line(&format!("{}: {}", i + 1, line));
        }
        if report.truncated {
            console.write_line("... (file continues)");
        }

        if let Some(needle) = search {
            match transcribe::count_occurrences(&report.content, needle) {
                0 => console.write_line(&format!("'{needle}' not found in the file")),
                n => console.write_line(&format!("Found '{needle}' {n} time(s) in the file")),
            }
        }

        if save_stats {
            match transcribe::save_stats(&report) {
                Ok(target) => {
                    console.write_line(&format!("Statistics saved to {}", target.display()));
                }
                Err(e) => {
                    failures += 1;
                    console.write_line(&format!("Error saving statistics: {e}"));
                }
            }
        }
        console.write_line("");
    }

    if failures > 0 {
        error!("inspect: {failures} of {} paths failed", paths.len());
        anyhow::bail!("{failures} file operation(s) failed");
    }
    Ok(())
}
