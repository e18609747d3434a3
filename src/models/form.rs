use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::profile::{
    parse_date, parse_positive, parse_positive_int, BodyWeight, IntakeProfile,
};

/// Target date the wizard starts with.
pub const DEFAULT_TARGET_DATE: &str = "2025-04-15";

/// A single editable field of the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Height,
    CurrentWeight,
    GoalWeight,
    Gender,
    Age,
    ActivityLevel,
    TargetDate,
    WeightUnit,
}

/// Raw values collected by the onboarding wizard, exactly as typed.
///
/// Nothing is validated until [`OnboardingForm::to_profile`] is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingForm {
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub height: String,
    pub current_weight: String,
    pub goal_weight: String,
    pub gender: String,
    pub age: String,
    pub activity_level: String,
    pub target_date: String,
    pub weight_unit: String,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            height: String::new(),
            current_weight: String::new(),
            goal_weight: String::new(),
            gender: String::new(),
            age: String::new(),
            activity_level: "moderate".to_string(),
            target_date: DEFAULT_TARGET_DATE.to_string(),
            weight_unit: "kg".to_string(),
        }
    }
}

impl OnboardingForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::Height => self.height = value,
            FormField::CurrentWeight => self.current_weight = value,
            FormField::GoalWeight => self.goal_weight = value,
            FormField::Gender => self.gender = value,
            FormField::Age => self.age = value,
            FormField::ActivityLevel => self.activity_level = value,
            FormField::TargetDate => self.target_date = value,
            FormField::WeightUnit => self.weight_unit = value,
        }
    }

    /// Parse the form into a calculator profile.
    ///
    /// Goal weight and target date are optional; an empty field means "not set".
    pub fn to_profile(&self) -> Result<IntakeProfile> {
        let unit = self.weight_unit.parse()?;
        let weight = parse_positive("weight", &self.current_weight)?;
        let height_cm = parse_positive("height", &self.height)?;
        let age_years = parse_positive_int("age", &self.age)?;
        let sex = self.gender.parse()?;
        let activity_level = self.activity_level.parse()?;

        let goal_weight = match self.goal_weight.trim() {
            "" => None,
            raw => Some(parse_positive("goal weight", raw)?),
        };
        let target_date = match self.target_date.trim() {
            "" => None,
            raw => Some(parse_date(raw)?),
        };

        Ok(IntakeProfile {
            weight: BodyWeight {
                value: weight,
                unit,
            },
            height_cm,
            age_years,
            sex,
            activity_level,
            goal_weight,
            target_date,
        })
    }
}
