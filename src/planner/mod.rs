pub mod builder;
pub mod calories;
pub mod constants;
pub mod history;
pub mod progress;

pub use builder::{build_plan, create_user_data};
pub use calories::{
    calculate_bmr, calculate_tdee, compute_daily_calorie_target,
    compute_daily_calorie_target_with,
};
pub use constants::*;
pub use history::{generate_history, simulated_intake, weight_drift, window_start};
pub use progress::{
    calorie_bar_heights, calorie_progress_percent, calories_remaining, weight_bar_heights,
    weight_progress_percent, ChartWindow,
};
