use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tally_planner_rs::interface::settings_lines;
use tally_planner_rs::models::FormField;
use tally_planner_rs::planner::{build_plan, create_user_data};
use tally_planner_rs::state::{Action, AppState, OnboardingStep, Screen};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
}

fn filled_state() -> AppState {
    let fields = [
        (FormField::Email, "alex@example.com"),
        (FormField::Password, "hunter2"),
        (FormField::Age, "30"),
        (FormField::Gender, "male"),
        (FormField::Height, "175"),
        (FormField::ActivityLevel, "sedentary"),
        (FormField::WeightUnit, "kg"),
        (FormField::CurrentWeight, "70"),
        (FormField::GoalWeight, "65"),
    ];

    fields
        .into_iter()
        .fold(AppState::new(), |state, (field, value)| {
            state.apply(Action::SetField(field, value.to_string()))
        })
}

#[test]
fn test_full_onboarding_flow() {
    let mut state = filled_state();
    for expected in [
        OnboardingStep::BasicInfo,
        OnboardingStep::WeightGoals,
        OnboardingStep::DailyPlan,
    ] {
        state = state.apply(Action::NextStep);
        assert_eq!(state.onboarding.step, expected);
    }

    let profile = state.onboarding.form.to_profile().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let user =
        create_user_data(&profile, &state.onboarding.form.email, today(), &mut rng).unwrap();
    assert_eq!(user.daily_calories, 1405);

    let state = state.apply(Action::CompleteOnboarding(user));
    assert!(state.onboarding_complete);
    assert_eq!(state.screen, Screen::Dashboard);

    let user = state.user.as_ref().unwrap();
    assert_eq!(user.start_weight, 70.0);
    assert_eq!(user.goal_weight, Some(65.0));
    assert_eq!(user.calorie_history.last().unwrap().date, today());
}

#[test]
fn test_regeneration_replaces_history_wholesale() {
    let state = filled_state();
    let profile = state.onboarding.form.to_profile().unwrap();

    let user = create_user_data(
        &profile,
        "alex@example.com",
        today(),
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    let state = state.apply(Action::CompleteOnboarding(user.clone()));

    let fresh = build_plan(&profile, today(), &mut StdRng::seed_from_u64(2)).unwrap();
    let state = state.apply(Action::RegeneratePlan(fresh.clone()));

    let updated = state.user.unwrap();
    assert_eq!(updated.weight_history, fresh.weight_history);
    assert_eq!(updated.calorie_history, fresh.calorie_history);
    assert_eq!(updated.daily_calories, user.daily_calories);
    assert_eq!(updated.start_date, user.start_date);
}

#[test]
fn test_logout_returns_to_onboarding() {
    let state = filled_state();
    let profile = state.onboarding.form.to_profile().unwrap();
    let user = create_user_data(
        &profile,
        "alex@example.com",
        today(),
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap();

    let state = state
        .apply(Action::CompleteOnboarding(user))
        .apply(Action::Navigate(Screen::Settings));
    assert_eq!(state.screen, Screen::Settings);

    let lines = settings_lines(state.user.as_ref().unwrap());
    assert!(lines[1].ends_with("alex@example.com"));
    assert!(lines[2].ends_with("65"));
    assert!(lines[4].ends_with("1405 kcal"));

    let state = state.apply(Action::Logout);

    assert_eq!(state.screen, Screen::Onboarding);
    assert!(state.user.is_none());
    assert!(!state.onboarding_complete);
    assert!(state.onboarding.form.email.is_empty());
}
