mod export;
mod session;

pub use export::{load_user_data, save_user_data, write_history_csv};
pub use session::{Action, AppState, OnboardingStep, Screen, WizardState};
