use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::error::{Result, TallyError};
use crate::models::{CalorieEntry, History, IntakeProfile, WeightEntry};
use crate::planner::constants::*;

/// Oldest day of the history window ending at `today`.
pub fn window_start(today: NaiveDate) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new((HISTORY_WINDOW_DAYS - 1) as u64))
        .ok_or_else(|| {
            TallyError::InvalidDate(format!("history window before {} is out of range", today))
        })
}

/// Daily weight change drawn from `u` in `[0, 1)`; negative means loss.
#[inline]
pub fn weight_drift(u: f64) -> f64 {
    (u - WEIGHT_DRIFT_OFFSET) * WEIGHT_DRIFT_SCALE
}

/// Simulated intake drawn from `u` in `[0, 1)`: 80-120% of the target.
#[inline]
pub fn simulated_intake(daily_target: i64, u: f64) -> i64 {
    round_half_up(daily_target as f64 * (INTAKE_MIN_FRACTION + u * INTAKE_SPREAD)) as i64
}

/// Build the synthetic weight and calorie series for the window ending at `today`.
///
/// The oldest weight is the profile's weight as entered. Every later day adds
/// a drift to an unrounded running weight; the stored value is rounded to one
/// decimal. Only the last [`CALORIE_WINDOW_DAYS`] days get a calorie entry.
///
/// Per day, the weight draw (skipped on the first day) happens before the
/// calorie draw, so a seeded `rng` reproduces the same output.
///
/// Rejects the same biometrics as the calorie target does, before any draw.
pub fn generate_history(
    profile: &IntakeProfile,
    daily_target: i64,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<History> {
    profile.validate()?;
    let start = window_start(today)?;
    let calorie_start = HISTORY_WINDOW_DAYS - CALORIE_WINDOW_DAYS;

    let mut history = History {
        weight_history: Vec::with_capacity(HISTORY_WINDOW_DAYS),
        calorie_history: Vec::with_capacity(CALORIE_WINDOW_DAYS),
    };

    let mut running_weight = profile.weight.value;

    for (offset, date) in start.iter_days().take(HISTORY_WINDOW_DAYS).enumerate() {
        let weight = if offset == 0 {
            running_weight
        } else {
            running_weight += weight_drift(rng.r#gen::<f64>());
            round_tenth(running_weight)
        };
        history.weight_history.push(WeightEntry { date, weight });

        if offset >= calorie_start {
            history.calorie_history.push(CalorieEntry {
                date,
                consumed: simulated_intake(daily_target, rng.r#gen::<f64>()),
                budget: daily_target,
            });
        }
    }

    debug!(
        %start,
        %today,
        final_weight = running_weight,
        "Generated synthetic history"
    );

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, BodyWeight, Sex};
    use rand::rngs::mock::StepRng;

    fn profile() -> IntakeProfile {
        IntakeProfile::new(
            BodyWeight::kg(80.0),
            180.0,
            40,
            Sex::Female,
            ActivityLevel::Light,
        )
    }

    #[test]
    fn test_weight_drift_bounds() {
        assert!((weight_drift(0.0) - -0.21).abs() < 1e-12);
        assert!((weight_drift(0.3)).abs() < 1e-12);
        assert!(weight_drift(0.999_999) < 0.49);
    }

    #[test]
    fn test_simulated_intake_band() {
        assert_eq!(simulated_intake(2000, 0.0), 1600);
        assert_eq!(simulated_intake(2000, 0.5), 2000);
        assert!(simulated_intake(2000, 0.999_999) <= 2400);
    }

    #[test]
    fn test_zero_draws_lose_weight_every_day() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let mut rng = StepRng::new(0, 0);
        let history = generate_history(&profile(), 1800, today, &mut rng).unwrap();

        // running weight = 80 - 0.21 * n
        assert_eq!(history.weight_history[0].weight, 80.0);
        assert!((history.weight_history[1].weight - 79.8).abs() < 1e-9);
        assert!((history.weight_history[15].weight - 76.9).abs() < 1e-9);
        assert!(history.calorie_history.iter().all(|c| c.consumed == 1440));
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let mut rng = StepRng::new(0, 0);
        let history = generate_history(&profile(), 1800, today, &mut rng).unwrap();

        assert_eq!(
            history.weight_history[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 19).unwrap()
        );
        assert_eq!(
            history.calorie_history[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 24).unwrap()
        );
    }

    #[test]
    fn test_window_underflow_is_error() {
        let mut rng = StepRng::new(0, 0);
        let result = generate_history(&profile(), 1800, NaiveDate::MIN, &mut rng);
        assert!(matches!(result, Err(TallyError::InvalidDate(_))));
    }
}
