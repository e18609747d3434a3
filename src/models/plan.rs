use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the synthetic weight series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// In the unit the profile's weight was entered in.
    pub weight: f64,
}

/// One day of the synthetic calorie series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieEntry {
    pub date: NaiveDate,
    pub consumed: i64,
    pub budget: i64,
}

/// Both synthetic series over the trailing window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    pub weight_history: Vec<WeightEntry>,
    pub calorie_history: Vec<CalorieEntry>,
}

/// Calorie target plus its synthetic history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub daily_calorie_target: i64,
    pub weight_history: Vec<WeightEntry>,
    pub calorie_history: Vec<CalorieEntry>,
}

impl PlanResult {
    pub fn new(daily_calorie_target: i64, history: History) -> Self {
        Self {
            daily_calorie_target,
            weight_history: history.weight_history,
            calorie_history: history.calorie_history,
        }
    }
}

/// Everything the app keeps about a user after onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub current_weight: f64,
    pub goal_weight: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub daily_calories: i64,
    pub start_date: NaiveDate,
    pub start_weight: f64,
    pub weight_history: Vec<WeightEntry>,
    pub calorie_history: Vec<CalorieEntry>,
}

impl UserData {
    /// Swap in a freshly computed plan, replacing target and both series.
    pub fn replace_plan(&mut self, plan: PlanResult) {
        self.daily_calories = plan.daily_calorie_target;
        self.weight_history = plan.weight_history;
        self.calorie_history = plan.calorie_history;
    }

    /// The plan portion of this record.
    pub fn plan(&self) -> PlanResult {
        PlanResult {
            daily_calorie_target: self.daily_calories,
            weight_history: self.weight_history.clone(),
            calorie_history: self.calorie_history.clone(),
        }
    }
}
