use crate::formatting::ColorMode;
use crate::input::MetricOverrides;
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vitalrisk")]
#[command(about = "Deterministic health risk scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more health metric records
    Assess {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score records and show how each factor contributed
    Explain {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Verbosity requested on the command line, for logger setup.
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Assess { output, .. } | Commands::Explain { output, .. } => {
                output.verbosity
            }
            Commands::Init { .. } => 0,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Metrics file (.json, .toml, .yaml); `-` reads JSON from stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .vitalrisk.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<f64>,

    /// Body mass index (kg/m²)
    #[arg(long, allow_negative_numbers = true)]
    pub bmi: Option<f64>,

    /// Systolic blood pressure (mmHg)
    #[arg(long = "blood-pressure", allow_negative_numbers = true)]
    pub blood_pressure: Option<f64>,

    /// HbA1c (%)
    #[arg(long, allow_negative_numbers = true)]
    pub hba1c: Option<f64>,

    /// Total cholesterol (mg/dL)
    #[arg(long, allow_negative_numbers = true)]
    pub cholesterol: Option<f64>,

    /// Sleep per night (hours)
    #[arg(long = "sleep-hours", allow_negative_numbers = true)]
    pub sleep_hours: Option<f64>,

    /// Steps per day
    #[arg(long = "daily-steps", allow_negative_numbers = true)]
    pub daily_steps: Option<f64>,

    /// Stress level (1-10)
    #[arg(long = "stress-level", allow_negative_numbers = true)]
    pub stress_level: Option<f64>,

    /// Family history of chronic disease (true/false)
    #[arg(long = "family-history")]
    pub family_history: Option<bool>,

    /// Reject metrics outside the usual ranges instead of warning
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    pub fn overrides(&self) -> MetricOverrides {
        MetricOverrides {
            age: self.age,
            bmi: self.bmi,
            blood_pressure: self.blood_pressure,
            hba1c: self.hba1c,
            cholesterol: self.cholesterol,
            sleep_hours: self.sleep_hours,
            daily_steps: self.daily_steps,
            stress_level: self.stress_level,
            family_history: self.family_history,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to config, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub plain: bool,

    /// When to use colors (defaults to config, then environment detection)
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Include per-factor contributions, info logging
    /// -vv: Debug logging
    /// -vvv: Trace logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
