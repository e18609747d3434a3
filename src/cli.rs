use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::models::{FormField, IntakeProfile, OnboardingForm};

/// Tally: calorie target and weight history planner.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the onboarding wizard and show the resulting dashboard.
    Onboard {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a plan from command-line biometrics.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Trailing days shown in the charts (7, 15 or 30).
        #[arg(long, default_value = "15")]
        window: String,
    },

    /// Print only the daily calorie target.
    Target {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Reject sex values other than male/female instead of using the female formula.
        #[arg(long)]
        strict_sex: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Onboard {
            output: OutputArgs::default(),
        }
    }
}

/// Biometrics as typed on the command line; parsed like the onboarding form.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Current body weight.
    #[arg(long)]
    pub weight: String,

    /// Unit for weight and goal weight (kg or lbs).
    #[arg(long, default_value = "kg")]
    pub unit: String,

    /// Height in centimeters.
    #[arg(long)]
    pub height: String,

    /// Age in years.
    #[arg(long)]
    pub age: String,

    /// male, female or other.
    #[arg(long)]
    pub sex: String,

    /// sedentary, light, moderate, active or veryActive.
    #[arg(long, default_value = "moderate")]
    pub activity: String,

    /// Goal weight, same unit as --weight.
    #[arg(long, default_value = "")]
    pub goal_weight: String,

    /// Target date (YYYY-MM-DD).
    #[arg(long, default_value = "")]
    pub target_date: String,

    /// Email recorded on the generated user data.
    #[arg(long, default_value = "")]
    pub email: String,
}

impl ProfileArgs {
    pub fn to_form(&self) -> OnboardingForm {
        let mut form = OnboardingForm::default();
        form.set(FormField::Email, self.email.as_str());
        form.set(FormField::CurrentWeight, self.weight.as_str());
        form.set(FormField::WeightUnit, self.unit.as_str());
        form.set(FormField::Height, self.height.as_str());
        form.set(FormField::Age, self.age.as_str());
        form.set(FormField::Gender, self.sex.as_str());
        form.set(FormField::ActivityLevel, self.activity.as_str());
        form.set(FormField::GoalWeight, self.goal_weight.as_str());
        form.set(FormField::TargetDate, self.target_date.as_str());
        form
    }
}

/// Reference date, randomness and export targets.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Reference "today" for the history window (defaults to the local date).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Seed for the history generator; omit for a fresh random history.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the user data as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the history as CSV to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl OutputArgs {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Parse a profile argument set, reporting the first invalid field.
pub fn parse_profile(args: &ProfileArgs) -> Result<IntakeProfile> {
    args.to_form().to_profile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::try_parse_from([
            "tally", "plan", "--weight", "70", "--height", "175", "--age", "30", "--sex", "male",
            "--activity", "sedentary", "--today", "2025-03-02", "--seed", "1",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Plan { profile, output, window }) => {
                let parsed = parse_profile(&profile).unwrap();
                assert_eq!(parsed.age_years, 30);
                assert_eq!(output.seed, Some(1));
                assert_eq!(output.today(), NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
                assert_eq!(window, "15");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_activity_surfaces_error() {
        let cli = Cli::try_parse_from([
            "tally", "target", "--weight", "70", "--height", "175", "--age", "30", "--sex",
            "male", "--activity", "extreme",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Target { profile, .. }) => {
                assert!(parse_profile(&profile).is_err());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
