use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::models::{IntakeProfile, PlanResult, UserData};
use crate::planner::calories::compute_daily_calorie_target;
use crate::planner::history::generate_history;

/// Calorie target plus synthetic history for `profile`, as of `today`.
pub fn build_plan(
    profile: &IntakeProfile,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<PlanResult> {
    let target = compute_daily_calorie_target(profile)?;
    let history = generate_history(profile, target, today, rng)?;

    info!(
        daily_target = target,
        %today,
        days = history.weight_history.len(),
        "Built plan"
    );

    Ok(PlanResult::new(target, history))
}

/// The user record produced when onboarding completes.
///
/// Start date is `today` and start weight is the entered weight.
pub fn create_user_data(
    profile: &IntakeProfile,
    email: &str,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<UserData> {
    let plan = build_plan(profile, today, rng)?;

    Ok(UserData {
        name: None,
        email: email.to_string(),
        current_weight: profile.weight.value,
        goal_weight: profile.goal_weight,
        target_date: profile.target_date,
        daily_calories: plan.daily_calorie_target,
        start_date: today,
        start_weight: profile.weight.value,
        weight_history: plan.weight_history,
        calorie_history: plan.calorie_history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, BodyWeight, Sex};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_create_user_data_fields() {
        let profile = IntakeProfile::new(
            BodyWeight::lbs(210.0),
            178.0,
            35,
            Sex::Male,
            ActivityLevel::Moderate,
        )
        .with_goal(195.0, NaiveDate::from_ymd_opt(2025, 4, 15));
        let today = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let user = create_user_data(&profile, "alex@example.com", today, &mut rng).unwrap();

        assert_eq!(user.email, "alex@example.com");
        assert_eq!(user.start_date, today);
        assert_eq!(user.start_weight, 210.0);
        assert_eq!(user.current_weight, 210.0);
        assert_eq!(user.goal_weight, Some(195.0));
        assert_eq!(user.daily_calories, compute_daily_calorie_target(&profile).unwrap());
        assert_eq!(user.weight_history.len(), 16);
        assert_eq!(user.calorie_history.len(), 11);
    }
}
