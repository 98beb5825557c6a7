//! Habits CLI - command-line interface for Habit Forge
//!
//! Commands:
//! - score: Score each habit in a snapshot file
//! - report: Produce a ranked strength report
//! - stack: Suggest stacking anchors for a new habit

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use habit_forge::{
    calculate_habit_strength_at, habit_stacking_suggestions, EngineError, HabitAnchor,
    HabitSnapshot, HabitStrengthConfig, StrengthEncoder, ENGINE_VERSION,
};

/// Habits - habit-strength scoring over JSON snapshot files
#[derive(Parser)]
#[command(name = "habits")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score habit completion histories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score each habit in the input (one JSON result per line)
    Score {
        /// Input file with an array of habit snapshots (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Weight preset
        #[arg(long, value_enum, default_value = "default")]
        config: ConfigPreset,

        /// Reference date (YYYY-MM-DD; defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Produce a ranked strength report for all habits
    Report {
        /// Input file with an array of habit snapshots (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Weight preset
        #[arg(long, value_enum, default_value = "default")]
        config: ConfigPreset,

        /// Reference date (YYYY-MM-DD; defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Suggest stacking anchors for a new habit
    Stack {
        /// Input file with an array of habit snapshots (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Name of the habit being started
        #[arg(long)]
        new: String,

        /// Weight preset
        #[arg(long, value_enum, default_value = "default")]
        config: ConfigPreset,

        /// Reference date (YYYY-MM-DD; defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigPreset {
    /// Balanced weights (repetition 0.35, recency 0.25, consistency 0.25,
    /// context 0.15)
    Default,
    /// Research-backed weights from Lally et al. (2010)
    Research,
}

impl ConfigPreset {
    fn resolve(self) -> HabitStrengthConfig {
        match self {
            ConfigPreset::Default => HabitStrengthConfig::default(),
            ConfigPreset::Research => HabitStrengthConfig::research(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), HabitsCliError> {
    match cli.command {
        Commands::Score {
            input,
            config,
            date,
        } => cmd_score(&input, config.resolve(), date.as_deref()),

        Commands::Report {
            input,
            config,
            date,
        } => cmd_report(&input, config.resolve(), date.as_deref()),

        Commands::Stack {
            input,
            new,
            config,
            date,
        } => cmd_stack(&input, &new, config.resolve(), date.as_deref()),
    }
}

fn cmd_score(
    input: &PathBuf,
    config: HabitStrengthConfig,
    date: Option<&str>,
) -> Result<(), HabitsCliError> {
    let habits = read_snapshots(input)?;
    let today = resolve_date(date)?;

    let pretty = atty::is(atty::Stream::Stdout);

    for habit in &habits {
        let result = calculate_habit_strength_at(
            &habit.completed_days,
            &config,
            habit.target_time_of_day,
            today,
        );

        if pretty {
            println!(
                "{:<24} {:>3}  {:<11} {:>3}d to habit",
                habit.name,
                result.score,
                result.classification.as_str(),
                result.estimated_days_to_habit
            );
            for recommendation in &result.recommendations {
                println!("    - {recommendation}");
            }
        } else {
            let line = serde_json::json!({
                "name": habit.name,
                "result": result,
            });
            println!("{}", serde_json::to_string(&line)?);
        }
    }

    Ok(())
}

fn cmd_report(
    input: &PathBuf,
    config: HabitStrengthConfig,
    date: Option<&str>,
) -> Result<(), HabitsCliError> {
    let habits = read_snapshots(input)?;
    let today = resolve_date(date)?;

    let encoder = StrengthEncoder::with_config(config);
    let report = encoder.encode_at(&habits, today);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_stack(
    input: &PathBuf,
    new_habit: &str,
    config: HabitStrengthConfig,
    date: Option<&str>,
) -> Result<(), HabitsCliError> {
    let habits = read_snapshots(input)?;
    let today = resolve_date(date)?;

    let anchors: Vec<HabitAnchor> = habits
        .iter()
        .filter(|h| h.name != new_habit)
        .map(|h| HabitAnchor {
            name: h.name.clone(),
            strength: calculate_habit_strength_at(
                &h.completed_days,
                &config,
                h.target_time_of_day,
                today,
            )
            .score,
        })
        .collect();

    let suggestions = habit_stacking_suggestions(&anchors, new_habit);

    if suggestions.is_empty() {
        eprintln!("No habit is strong enough to anchor on yet (needs strength > 60)");
    } else {
        for suggestion in suggestions {
            println!("{suggestion}");
        }
    }

    Ok(())
}

// Helper functions

fn read_snapshots(input: &PathBuf) -> Result<Vec<HabitSnapshot>, HabitsCliError> {
    let data = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let habits = HabitSnapshot::parse_many(&data)?;

    if habits.is_empty() {
        return Err(HabitsCliError::NoHabits);
    }

    Ok(habits)
}

fn resolve_date(date: Option<&str>) -> Result<NaiveDate, HabitsCliError> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| HabitsCliError::InvalidDate(raw.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

// Error types

#[derive(Debug)]
enum HabitsCliError {
    Io(io::Error),
    Json(serde_json::Error),
    Engine(EngineError),
    InvalidDate(String),
    NoHabits,
}

impl From<io::Error> for HabitsCliError {
    fn from(e: io::Error) -> Self {
        HabitsCliError::Io(e)
    }
}

impl From<serde_json::Error> for HabitsCliError {
    fn from(e: serde_json::Error) -> Self {
        HabitsCliError::Json(e)
    }
}

impl From<EngineError> for HabitsCliError {
    fn from(e: EngineError) -> Self {
        HabitsCliError::Engine(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<HabitsCliError> for CliError {
    fn from(e: HabitsCliError) -> Self {
        match e {
            HabitsCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            HabitsCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some(
                    "Input must be a JSON array of {name, completed_days, target_time_of_day}"
                        .to_string(),
                ),
            },
            HabitsCliError::Engine(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some(
                    "Input must be a JSON array of {name, completed_days, target_time_of_day}"
                        .to_string(),
                ),
            },
            HabitsCliError::InvalidDate(raw) => CliError {
                code: "INVALID_DATE".to_string(),
                message: format!("Cannot parse reference date: {raw}"),
                hint: Some("Use YYYY-MM-DD".to_string()),
            },
            HabitsCliError::NoHabits => CliError {
                code: "NO_HABITS".to_string(),
                message: "No habits found in input".to_string(),
                hint: Some("Ensure the input file is a non-empty JSON array".to_string()),
            },
        }
    }
}
