//! CLI argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Polymorphic vehicle and device registry with an interactive selector.
#[derive(Parser, Debug)]
#[command(name = "polyfleet", version)]
pub struct Args {
    /// JSON catalog to load instead of the built-in fleet
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "polyfleet=debug")
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive vehicle selector (default)
    Explore {
        /// Read menu input from a file instead of stdin
        #[arg(long, value_name = "PATH")]
        script: Option<PathBuf>,
    },
    /// Every vehicle moves, signals, and performs its maneuver
    Parade,
    /// Scripted walk through every device in the catalog
    Devices,
    /// Write a numbered, upper-cased copy of a text file
    Transcribe {
        #[arg(long, value_name = "PATH")]
        input: PathBuf,
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
    },
    /// Character, line, and word counts for text files
    Inspect {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
        /// Count occurrences of this text in each file
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
        /// Write `{path}_stats.txt` next to each file
        #[arg(long)]
        save_stats: bool,
    },
}

impl Args {
    /// The subcommand to run; `explore` reading stdin when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Explore { script: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(args)
    }

    #[test]
    fn test_default_is_explore() {
        let args = parse_args(&["polyfleet"]).unwrap();
        assert_eq!(args.command(), Command::Explore { script: None });
        assert_eq!(args.log_level, "warn");
        assert!(args.catalog.is_none());
    }

    #[test]
    fn test_global_catalog_after_subcommand() {
        let args = parse_args(&["polyfleet", "parade", "--catalog", "fleet.json"]).unwrap();
        assert_eq!(args.command(), Command::Parade);
        assert_eq!(args.catalog, Some(PathBuf::from("fleet.json")));
    }

    #[test]
    fn test_explore_script() {
        let args = parse_args(&["polyfleet", "explore", "--script", "in.txt"]).unwrap();
        assert_eq!(
            args.command(),
            Command::Explore {
                script: Some(PathBuf::from("in.txt"))
            }
        );
    }

    #[test]
    fn test_transcribe_requires_both_paths() {
        assert!(parse_args(&["polyfleet", "transcribe", "--input", "a.txt"]).is_err());
        let args = parse_args(&[
            "polyfleet",
            "transcribe",
            "--input",
            "a.txt",
            "--output",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(
            args.command(),
            Command::Transcribe {
                input: PathBuf::from("a.txt"),
                output: PathBuf::from("b.txt"),
            }
        );
    }

    #[test]
    fn test_inspect_many_paths() {
        let args = parse_args(&[
            "polyfleet",
            "inspect",
            "a.txt",
            "b.txt",
            "--search",
            "fox",
            "--save-stats",
        ])
        .unwrap();
        match args.command() {
            Command::Inspect {
                paths,
                search,
                save_stats,
            } => {
                assert_eq!(paths.len(), 2);
                assert_eq!(search.as_deref(), Some("fox"));
                assert!(save_stats);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_inspect_needs_a_path() {
        assert!(parse_args(&["polyfleet", "inspect"]).is_err());
    }
}
