// ABOUTME: fitplan-cli - command-line front end for the workout and diet plan engine
// ABOUTME: Reads profile, catalog, and history JSON files and prints the generated plan as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//!
//! Usage:
//! ```bash
//! # Workout for a profile from an exercise catalog
//! fitplan-cli workout --profile profile.json --catalog exercises.json
//!
//! # Force a category and avoid recently used exercises
//! fitplan-cli workout --profile profile.json --catalog exercises.json --category upper --history recent.json
//!
//! # Reproducible diet from the built-in meal catalog
//! fitplan-cli diet --profile profile.json --seed 7
//!
//! # Show the computed energy targets
//! fitplan-cli targets --profile profile.json
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitplan::logging::LoggingConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Fitplan workout and diet plan generator",
    long_about = "Generates a daily workout or diet plan from a profile and catalog, \
                  printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a workout
    Workout {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Exercise catalog JSON file (array of exercises)
        #[arg(long)]
        catalog: PathBuf,

        /// Category override (full body, upper, lower, cardio, mobility, core, split)
        #[arg(long)]
        category: Option<String>,

        /// Recently used exercise names (JSON array)
        #[arg(long)]
        history: Option<PathBuf>,

        /// RNG seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a diet
    Diet {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Food catalog JSON file; the built-in catalog is used when omitted
        #[arg(long)]
        foods: Option<PathBuf>,

        /// Recently used meal names (JSON array)
        #[arg(long)]
        history: Option<PathBuf>,

        /// RNG seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show energy and protein targets with intermediates
    Targets {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let output = match cli.command {
        Command::Workout {
            profile,
            catalog,
            category,
            history,
            seed,
        } => commands::workout(&profile, &catalog, category.as_deref(), history.as_deref(), seed)?,
        Command::Diet {
            profile,
            foods,
            history,
            seed,
        } => commands::diet(&profile, foods.as_deref(), history.as_deref(), seed)?,
        Command::Targets { profile } => commands::targets(&profile)?,
    };

    println!("{output}");
    Ok(())
}
