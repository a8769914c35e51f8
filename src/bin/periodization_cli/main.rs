// ABOUTME: Periodization CLI - command-line front end for the training recommendation engine
// ABOUTME: Lists programs and exercises, evaluates quiz answers, and runs strength calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List programs suited to intermediates
//! periodization-cli programs list --level intermediate
//!
//! # Show one program
//! periodization-cli programs show undulating-dup
//!
//! # Evaluate a file of quiz answers
//! periodization-cli quiz evaluate --answers answers.json
//!
//! # Estimate a one-rep max
//! periodization-cli calc one-rm --weight 100 --reps 10 --formula brzycki
//!
//! # Convert between RPE and percentage of 1RM
//! periodization-cli calc rpe --rpe 8.5
//! periodization-cli calc rpe --percentage 88
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use periodization_coach::config::CoachConfig;
use periodization_coach::logging::{self, LoggingConfig};
use periodization_coach::models::{ExperienceLevel, MuscleGroup};
use periodization_intelligence::{LiftType, OneRepMaxAlgorithm};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "periodization-cli",
    about = "Periodization training coach",
    long_about = "Evaluates onboarding quiz answers into a periodization program and exposes the strength training calculators."
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
    /// Program catalog
    Programs {
        #[command(subcommand)]
        action: ProgramsCommand,
    },

    /// Exercise library
    Exercises {
        #[command(subcommand)]
        action: ExercisesCommand,
    },

    /// Onboarding quiz
    Quiz {
        #[command(subcommand)]
        action: QuizCommand,
    },

    /// Strength training calculators
    Calc {
        #[command(subcommand)]
        action: CalcCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgramsCommand {
    /// List programs in catalog order
    List {
        /// Only programs recommended for this level
        #[arg(long)]
        level: Option<ExperienceLevel>,
    },

    /// Show a single program
    Show {
        /// Program id (e.g., "`linear-basic`")
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExercisesCommand {
    /// List exercises
    List {
        /// Only exercises of this difficulty
        #[arg(long)]
        difficulty: Option<ExperienceLevel>,

        /// Only exercises for this muscle group
        #[arg(long)]
        muscle_group: Option<MuscleGroup>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum QuizCommand {
    /// Print the questionnaire
    Questions,

    /// Evaluate a JSON file of answers and print the recommendation
    Evaluate {
        /// Path to a JSON array of `{ "question_id", "answer" }` objects
        #[arg(long)]
        answers: PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CalcCommand {
    /// Estimate a one-rep max with its percentage table
    OneRm {
        /// Weight lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Reps completed
        #[arg(long)]
        reps: u32,

        /// Formula (epley, brzycki, lombardi, mayhew); configured default if omitted
        #[arg(long)]
        formula: Option<OneRepMaxAlgorithm>,
    },

    /// Convert RPE to percentage of 1RM or back
    #[command(group(ArgGroup::new("input").required(true).args(["rpe", "percentage"])))]
    Rpe {
        /// RPE to convert
        #[arg(long)]
        rpe: Option<f64>,

        /// Percentage of 1RM to convert
        #[arg(long)]
        percentage: Option<f64>,
    },

    /// Training volume of a set scheme
    Volume {
        /// Number of sets
        #[arg(long)]
        sets: u32,

        /// Reps per set
        #[arg(long)]
        reps: u32,

        /// Load (kg)
        #[arg(long)]
        weight: f64,
    },

    /// Classify a lift against bodyweight strength standards
    Strength {
        /// Lift (squat, bench, deadlift)
        #[arg(long)]
        lift: LiftType,

        /// Weight lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Body weight (kg)
        #[arg(long)]
        body_weight: f64,
    },

    /// Deload load
    Deload {
        /// Current working weight (kg)
        #[arg(long)]
        weight: f64,

        /// Deload factor; configured default if omitted
        #[arg(long)]
        factor: Option<f64>,
    },

    /// Training max from a one-rep max
    TrainingMax {
        /// One-rep max (kg)
        #[arg(long)]
        one_rm: f64,

        /// Training max factor; configured default if omitted
        #[arg(long)]
        factor: Option<f64>,
    },

    /// Hours of recovery after a session
    Recovery {
        /// Session volume load
        #[arg(long)]
        volume: f64,

        /// Session intensity (% of 1RM)
        #[arg(long)]
        intensity: f64,
    },

    /// Next session load under double progression
    NextWeight {
        /// Current working weight (kg)
        #[arg(long)]
        weight: f64,

        /// Reps achieved
        #[arg(long)]
        reps: u32,

        /// Target reps
        #[arg(long)]
        target_reps: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingConfig::from_env().verbose().init()?;
    } else {
        logging::init_from_env()?;
    }

    let config = CoachConfig::from_env()?;
    debug!(environment = %config.environment, "Configuration loaded");

    match cli.command {
        Command::Programs { action } => match action {
            ProgramsCommand::List { level } => commands::programs::list(level)?,
            ProgramsCommand::Show { id } => commands::programs::show(&id)?,
        },
        Command::Exercises { action } => match action {
            ExercisesCommand::List {
                difficulty,
                muscle_group,
            } => commands::exercises::list(difficulty, muscle_group)?,
        },
        Command::Quiz { action } => match action {
            QuizCommand::Questions => commands::quiz::questions()?,
            QuizCommand::Evaluate { answers } => commands::quiz::evaluate(&config, &answers)?,
        },
        Command::Calc { action } => run_calc(action)?,
    }

    Ok(())
}

fn run_calc(action: CalcCommand) -> Result<()> {
    match action {
        CalcCommand::OneRm {
            weight,
            reps,
            formula,
        } => commands::calc::one_rm(weight, reps, formula),
        CalcCommand::Rpe { rpe, percentage } => commands::calc::rpe(rpe, percentage),
        CalcCommand::Volume { sets, reps, weight } => commands::calc::volume(sets, reps, weight),
        CalcCommand::Strength {
            lift,
            weight,
            body_weight,
        } => commands::calc::strength(lift, weight, body_weight),
        CalcCommand::Deload { weight, factor } => commands::calc::deload(weight, factor),
        CalcCommand::TrainingMax { one_rm, factor } => commands::calc::training_max(one_rm, factor),
        CalcCommand::Recovery { volume, intensity } => {
            commands::calc::recovery(volume, intensity)
        }
        CalcCommand::NextWeight {
            weight,
            reps,
            target_reps,
        } => commands::calc::next_weight(weight, reps, target_reps),
    }
}
