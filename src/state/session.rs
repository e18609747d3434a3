use crate::models::{FormField, OnboardingForm, PlanResult, UserData};

/// Top-level screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Onboarding,
    Dashboard,
    Charts,
    Settings,
}

/// The four steps of the onboarding wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Account,
    BasicInfo,
    WeightGoals,
    DailyPlan,
}

impl OnboardingStep {
    pub const COUNT: usize = 4;

    /// 1-based position shown as "Step n of 4".
    pub fn number(&self) -> usize {
        match self {
            OnboardingStep::Account => 1,
            OnboardingStep::BasicInfo => 2,
            OnboardingStep::WeightGoals => 3,
            OnboardingStep::DailyPlan => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Account => "Account Setup",
            OnboardingStep::BasicInfo => "Personal Information",
            OnboardingStep::WeightGoals => "Weight Goals",
            OnboardingStep::DailyPlan => "Daily Plan",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            OnboardingStep::Account => OnboardingStep::BasicInfo,
            OnboardingStep::BasicInfo => OnboardingStep::WeightGoals,
            OnboardingStep::WeightGoals | OnboardingStep::DailyPlan => OnboardingStep::DailyPlan,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            OnboardingStep::Account | OnboardingStep::BasicInfo => OnboardingStep::Account,
            OnboardingStep::WeightGoals => OnboardingStep::BasicInfo,
            OnboardingStep::DailyPlan => OnboardingStep::WeightGoals,
        }
    }

    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::DailyPlan
    }
}

/// Wizard position plus the form it is filling in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub step: OnboardingStep,
    pub form: OnboardingForm,
}

/// Everything that changes the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetField(FormField, String),
    NextStep,
    PreviousStep,
    CompleteOnboarding(UserData),
    RegeneratePlan(PlanResult),
    Navigate(Screen),
    Logout,
}

/// Session state for one run of the app.
///
/// Only [`AppState::apply`] produces a new state; the previous one is consumed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub screen: Screen,
    pub onboarding: WizardState,
    pub user: Option<UserData>,
    pub onboarding_complete: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SetField(field, value) => {
                self.onboarding.form.set(field, value);
            }
            Action::NextStep => {
                self.onboarding.step = self.onboarding.step.next();
            }
            Action::PreviousStep => {
                self.onboarding.step = self.onboarding.step.previous();
            }
            Action::CompleteOnboarding(user) => {
                self.user = Some(user);
                self.onboarding_complete = true;
                self.screen = Screen::Dashboard;
            }
            Action::RegeneratePlan(plan) => {
                if let Some(user) = self.user.as_mut() {
                    user.replace_plan(plan);
                }
            }
            Action::Navigate(screen) => {
                // Everything past onboarding needs a user to show.
                if screen == Screen::Onboarding || self.user.is_some() {
                    self.screen = screen;
                }
            }
            Action::Logout => {
                self = AppState::default();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_user() -> UserData {
        let day = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        UserData {
            name: Some("Alex Johnson".to_string()),
            email: "alex@example.com".to_string(),
            current_weight: 204.5,
            goal_weight: Some(195.0),
            target_date: NaiveDate::from_ymd_opt(2025, 4, 15),
            daily_calories: 1800,
            start_date: day,
            start_weight: 210.0,
            weight_history: vec![],
            calorie_history: vec![],
        }
    }

    #[test]
    fn test_step_bounds() {
        let state = AppState::new().apply(Action::PreviousStep);
        assert_eq!(state.onboarding.step, OnboardingStep::Account);

        let state = (0..10).fold(state, |s, _| s.apply(Action::NextStep));
        assert_eq!(state.onboarding.step, OnboardingStep::DailyPlan);
        assert!(state.onboarding.step.is_last());
        assert_eq!(state.onboarding.step.number(), OnboardingStep::COUNT);
    }

    #[test]
    fn test_set_field() {
        let state = AppState::new().apply(Action::SetField(FormField::Age, "30".to_string()));
        assert_eq!(state.onboarding.form.age, "30");
    }

    #[test]
    fn test_navigation_requires_user() {
        let state = AppState::new().apply(Action::Navigate(Screen::Charts));
        assert_eq!(state.screen, Screen::Onboarding);

        let state = state
            .apply(Action::CompleteOnboarding(sample_user()))
            .apply(Action::Navigate(Screen::Charts));
        assert_eq!(state.screen, Screen::Charts);
        assert!(state.onboarding_complete);
    }

    #[test]
    fn test_logout_resets_everything() {
        let state = AppState::new()
            .apply(Action::SetField(FormField::Email, "a@b.c".to_string()))
            .apply(Action::CompleteOnboarding(sample_user()))
            .apply(Action::Logout);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_regenerate_replaces_plan() {
        let plan = PlanResult {
            daily_calorie_target: 1500,
            weight_history: vec![],
            calorie_history: vec![],
        };

        let without_user = AppState::new().apply(Action::RegeneratePlan(plan.clone()));
        assert!(without_user.user.is_none());

        let state = AppState::new()
            .apply(Action::CompleteOnboarding(sample_user()))
            .apply(Action::RegeneratePlan(plan));
        assert_eq!(state.user.unwrap().daily_calories, 1500);
    }
}
