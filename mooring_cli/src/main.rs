//! # Mooring Cost CLI
//!
//! Command-line front end for `mooring_core`.
//!
//! - `--design FILE` evaluates a saved design file
//! - `--reference` evaluates the built-in reference design
//! - otherwise an interactive session walks through the input tiers
//!
//! Reports print as text, or as JSON with `--json`, and can be saved with
//! `--save FILE`.

mod interactive;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use mooring_core::{file_io, CostReport, DesignInput, DesignRules, PropertyDatabase};

#[derive(Debug, Parser)]
#[command(version, about = "Estimate the capital cost of a floating-platform mooring system")]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Evaluate a JSON design file instead of prompting
    #[arg(short, long, value_name = "FILE", conflicts_with = "reference")]
    design: Option<PathBuf>,

    /// Evaluate the built-in reference design
    #[arg(long)]
    reference: bool,

    /// Property database (TOML) to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    database: Option<PathBuf>,

    /// Design rules (TOML) overriding margins and default safety factors
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the report as JSON to FILE
    #[arg(short, long, value_name = "FILE")]
    save: Option<PathBuf>,
}

impl Cli {
    fn run(self) -> anyhow::Result<()> {
        setup_logging(self.verbose);

        let custom_db;
        let db: &PropertyDatabase = match &self.database {
            Some(path) => {
                custom_db = PropertyDatabase::load(path)
                    .with_context(|| format!("failed to load property database {}", path.display()))?;
                &custom_db
            }
            None => PropertyDatabase::builtin()?,
        };
        let rules = match &self.rules {
            Some(path) => DesignRules::load(path)
                .with_context(|| format!("failed to load design rules {}", path.display()))?,
            None => DesignRules::default(),
        };

        let input = if let Some(path) = &self.design {
            Some(file_io::load_design(path)?.design)
        } else if self.reference {
            Some(DesignInput::Reference)
        } else {
            None
        };

        match input {
            Some(input) => {
                let report = mooring_core::evaluate(db, &input, rules)?;
                self.emit(&report)
            }
            None => interactive::run(db, rules, |report| self.emit(report)),
        }
    }

    fn emit(&self, report: &CostReport) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            println!("{}", report);
        }
        if let Some(path) = &self.save {
            save(report, path)?;
        }
        Ok(())
    }
}

fn save(report: &CostReport, path: &Path) -> anyhow::Result<()> {
    file_io::save_report(report, path)?;
    eprintln!("Report saved to {}", path.display());
    Ok(())
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_design_conflicts_with_reference() {
        let result = Cli::try_parse_from(["mooring_cli", "--design", "a.json", "--reference"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["mooring_cli", "-vv", "--reference", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.reference);
        assert!(cli.json);
    }
}
