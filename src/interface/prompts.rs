use dialoguer::{Confirm, Input, Password, Select};

use crate::error::Result;
use crate::models::profile::{parse_date, parse_positive, parse_positive_int};
use crate::models::{ActivityLevel, FormField, OnboardingForm, Sex, WeightUnit};
use crate::state::{Action, OnboardingStep};

/// Prompt for a text value that must pass `check`.
fn prompt_validated<F>(prompt: &str, current: &str, allow_empty: bool, check: F) -> Result<String>
where
    F: Fn(&str) -> std::result::Result<(), String>,
{
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .validate_with(move |value: &String| -> std::result::Result<(), String> {
            if allow_empty && value.trim().is_empty() {
                return Ok(());
            }
            check(value)
        });

    if !current.is_empty() {
        input = input.default(current.to_string());
    }

    Ok(input.interact_text()?.trim().to_string())
}

fn positive_number(field: &'static str) -> impl Fn(&str) -> std::result::Result<(), String> {
    move |value| parse_positive(field, value).map(|_| ()).map_err(|e| e.to_string())
}

/// Step 1: email and password.
pub fn prompt_account(form: &OnboardingForm) -> Result<Vec<Action>> {
    let email = prompt_validated("Email", &form.email, false, |value| {
        if value.contains('@') {
            Ok(())
        } else {
            Err("Please enter a valid email address".to_string())
        }
    })?;

    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    Ok(vec![
        Action::SetField(FormField::Email, email),
        Action::SetField(FormField::Password, password),
    ])
}

/// Step 2: age, sex, height and activity level.
pub fn prompt_basic_info(form: &OnboardingForm) -> Result<Vec<Action>> {
    let age = prompt_validated("Age (years)", &form.age, false, |value| {
        parse_positive_int("age", value)
            .map(|_| ())
            .map_err(|e| e.to_string())
    })?;

    let sexes = [Sex::Male, Sex::Female, Sex::Other];
    let labels = ["Male", "Female", "Other"];
    let current_sex = form.gender.parse::<Sex>().ok();
    let sex_idx = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(sexes.iter().position(|s| Some(*s) == current_sex).unwrap_or(0))
        .interact()?;

    let height = prompt_validated("Height (cm)", &form.height, false, positive_number("height"))?;

    let current_level = form.activity_level.parse::<ActivityLevel>().unwrap_or_default();
    let descriptions: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.description()).collect();
    let level_idx = Select::new()
        .with_prompt("Activity Level")
        .items(&descriptions)
        .default(
            ActivityLevel::ALL
                .iter()
                .position(|l| *l == current_level)
                .unwrap_or(0),
        )
        .interact()?;

    Ok(vec![
        Action::SetField(FormField::Age, age),
        Action::SetField(FormField::Gender, sexes[sex_idx].key().to_string()),
        Action::SetField(FormField::Height, height),
        Action::SetField(
            FormField::ActivityLevel,
            ActivityLevel::ALL[level_idx].key().to_string(),
        ),
    ])
}

/// Step 3: weight unit, current and goal weight, target date.
pub fn prompt_weight_goals(form: &OnboardingForm) -> Result<Vec<Action>> {
    let units = [WeightUnit::Kg, WeightUnit::Lbs];
    let current_unit = form.weight_unit.parse::<WeightUnit>().unwrap_or_default();
    let unit_idx = Select::new()
        .with_prompt("Weight unit")
        .items(&["kg", "lbs"])
        .default(units.iter().position(|u| *u == current_unit).unwrap_or(0))
        .interact()?;
    let unit = units[unit_idx];

    let current = prompt_validated(
        &format!("Current Weight ({})", unit),
        &form.current_weight,
        false,
        positive_number("weight"),
    )?;

    let goal = prompt_validated(
        &format!("Goal Weight ({}, optional)", unit),
        &form.goal_weight,
        true,
        positive_number("goal weight"),
    )?;

    let target_date = prompt_validated(
        "Target Date (YYYY-MM-DD, optional)",
        &form.target_date,
        true,
        |value| parse_date(value).map(|_| ()).map_err(|e| e.to_string()),
    )?;

    Ok(vec![
        Action::SetField(FormField::WeightUnit, unit.symbol().to_string()),
        Action::SetField(FormField::CurrentWeight, current),
        Action::SetField(FormField::GoalWeight, goal),
        Action::SetField(FormField::TargetDate, target_date),
    ])
}

/// Collect the fields belonging to `step`. The last step has none.
pub fn prompt_step(step: OnboardingStep, form: &OnboardingForm) -> Result<Vec<Action>> {
    match step {
        OnboardingStep::Account => prompt_account(form),
        OnboardingStep::BasicInfo => prompt_basic_info(form),
        OnboardingStep::WeightGoals => prompt_weight_goals(form),
        OnboardingStep::DailyPlan => Ok(Vec::new()),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
