use tracing::{debug, warn};

use crate::error::{Result, TallyError};
use crate::models::{IntakeProfile, Sex, SexPolicy};
use crate::planner::constants::*;

/// Sex constant of the Mifflin-St Jeor equation.
///
/// Under [`SexPolicy::FemaleFallback`] every non-male value takes the female
/// constant; under [`SexPolicy::Strict`] `Other` is rejected.
pub fn sex_constant(sex: Sex, policy: SexPolicy) -> Result<f64> {
    match (sex, policy) {
        (Sex::Male, _) => Ok(MSJ_MALE_CONSTANT),
        (Sex::Female, _) => Ok(MSJ_FEMALE_CONSTANT),
        (Sex::Other, SexPolicy::FemaleFallback) => Ok(MSJ_FEMALE_CONSTANT),
        (Sex::Other, SexPolicy::Strict) => Err(TallyError::UnsupportedSex(sex.to_string())),
    }
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor.
///
/// `BMR = 10 * weight_kg + 6.25 * height_cm - 5 * age + s`, where `s` is +5
/// for men and -161 otherwise. Weight is converted to kilograms first.
pub fn calculate_bmr(profile: &IntakeProfile, policy: SexPolicy) -> Result<f64> {
    profile.validate()?;

    let bmr = MSJ_WEIGHT_COEF * profile.weight.to_kg() + MSJ_HEIGHT_COEF * profile.height_cm
        - MSJ_AGE_COEF * profile.age_years as f64
        + sex_constant(profile.sex, policy)?;

    Ok(bmr)
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn calculate_tdee(profile: &IntakeProfile, policy: SexPolicy) -> Result<f64> {
    let bmr = calculate_bmr(profile, policy)?;
    Ok(bmr * profile.activity_level.multiplier())
}

/// Daily calorie target with the default [`SexPolicy`].
pub fn compute_daily_calorie_target(profile: &IntakeProfile) -> Result<i64> {
    compute_daily_calorie_target_with(profile, SexPolicy::default())
}

/// Daily calorie target: `round(TDEE - 500)`.
///
/// The result is not clamped. Extreme inputs can produce a target near or
/// below zero; that is reported as-is.
pub fn compute_daily_calorie_target_with(profile: &IntakeProfile, policy: SexPolicy) -> Result<i64> {
    let bmr = calculate_bmr(profile, policy)?;
    let tdee = bmr * profile.activity_level.multiplier();
    let target = round_half_up(tdee - DAILY_DEFICIT_KCAL) as i64;

    debug!(
        bmr,
        tdee,
        daily_target = target,
        activity = %profile.activity_level,
        sex = %profile.sex,
        "Computed daily calorie target"
    );

    if target <= 0 {
        warn!(daily_target = target, "Daily calorie target is not positive");
    }

    Ok(target)
}
