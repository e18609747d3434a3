pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{Result, TallyError};
pub use models::{IntakeProfile, PlanResult, UserData};
pub use planner::{build_plan, compute_daily_calorie_target, generate_history};
