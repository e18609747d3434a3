use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{Result, TallyError};
use crate::planner::constants::{
    ACTIVE_MULT, KG_PER_LB, LIGHT_MULT, MODERATE_MULT, SEDENTARY_MULT, VERY_ACTIVE_MULT,
};

/// Minimum similarity before an unknown key gets a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Biological sex as collected by the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn key(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sex {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            "other" => Ok(Sex::Other),
            _ => Err(TallyError::UnsupportedSex(s.to_string())),
        }
    }
}

/// How the calculator treats [`Sex::Other`], which has no formula of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SexPolicy {
    /// Use the female constant for anything that is not male.
    #[default]
    FemaleFallback,
    /// Reject anything outside male/female.
    Strict,
}

/// Activity level, mapped to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "veryActive",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_MULT,
            ActivityLevel::Light => LIGHT_MULT,
            ActivityLevel::Moderate => MODERATE_MULT,
            ActivityLevel::Active => ACTIVE_MULT,
            ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        }
    }

    /// Label shown by the onboarding wizard.
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (office job, little exercise)",
            ActivityLevel::Light => "Light Activity (light exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate Activity (moderate exercise 3-5 days/week)",
            ActivityLevel::Active => "Very Active (hard exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Extra Active (very hard exercise & physical job)",
        }
    }

    /// Closest known key to an unrecognized input, if any is close enough.
    pub fn suggest(input: &str) -> Option<&'static str> {
        let input = input.trim().to_lowercase();
        ActivityLevel::ALL
            .iter()
            .map(|level| (level.key(), jaro_winkler(&level.key().to_lowercase(), &input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(key, _)| key)
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        ActivityLevel::Moderate
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActivityLevel {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.key().to_lowercase() == wanted)
            .ok_or_else(|| TallyError::InvalidActivityLevel {
                given: s.to_string(),
                suggestion: ActivityLevel::suggest(s).map(str::to_string),
            })
    }
}

/// Unit a body weight was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Ok(WeightUnit::Kg),
            "lb" | "lbs" => Ok(WeightUnit::Lbs),
            _ => Err(TallyError::numeric("weight unit", s)),
        }
    }
}

/// A body weight together with the unit it was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyWeight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl BodyWeight {
    pub fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    pub fn lbs(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Lbs,
        }
    }

    /// The weight in kilograms, as the BMR formula expects.
    pub fn to_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Kg => self.value,
            WeightUnit::Lbs => self.value * KG_PER_LB,
        }
    }
}

/// Biometrics and goal for one plan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeProfile {
    pub weight: BodyWeight,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    /// Same unit as `weight`.
    #[serde(default)]
    pub goal_weight: Option<f64>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl IntakeProfile {
    pub fn new(
        weight: BodyWeight,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            weight,
            height_cm,
            age_years,
            sex,
            activity_level,
            goal_weight: None,
            target_date: None,
        }
    }

    pub fn with_goal(mut self, goal_weight: f64, target_date: Option<NaiveDate>) -> Self {
        self.goal_weight = Some(goal_weight);
        self.target_date = target_date;
        self
    }

    /// Reject non-positive or non-finite biometrics.
    pub fn validate(&self) -> Result<()> {
        positive("weight", self.weight.value)?;
        positive("height", self.height_cm)?;
        if self.age_years == 0 {
            return Err(TallyError::numeric("age", self.age_years));
        }
        if let Some(goal) = self.goal_weight {
            positive("goal weight", goal)?;
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TallyError::numeric(field, value))
    }
}

/// Parse a strictly positive, finite number from user text.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TallyError::numeric(field, raw))?;
    positive(field, value).map_err(|_| TallyError::numeric(field, raw))
}

/// Parse a strictly positive whole number from user text.
pub fn parse_positive_int(field: &'static str, raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(TallyError::numeric(field, raw)),
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| TallyError::InvalidDate(format!("'{}': {}", raw, e)))
}
