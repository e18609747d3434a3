pub mod form;
pub mod plan;
pub mod profile;

pub use form::{FormField, OnboardingForm};
pub use plan::{CalorieEntry, History, PlanResult, UserData, WeightEntry};
pub use profile::{ActivityLevel, BodyWeight, IntakeProfile, Sex, SexPolicy, WeightUnit};
