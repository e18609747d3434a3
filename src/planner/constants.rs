// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const MSJ_WEIGHT_COEF: f64 = 10.0;

/// kcal per centimeter of height.
pub const MSJ_HEIGHT_COEF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const MSJ_AGE_COEF: f64 = 5.0;

/// Constant term for the male branch.
pub const MSJ_MALE_CONSTANT: f64 = 5.0;

/// Constant term for the female branch (also used for "other" under fallback).
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers and deficit
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

/// Fixed daily deficit subtracted from TDEE (kcal).
pub const DAILY_DEFICIT_KCAL: f64 = 500.0;

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453_592_37;

// ─────────────────────────────────────────────────────────────────────────────
// Synthetic history
// ─────────────────────────────────────────────────────────────────────────────

/// Days in the weight history window, today included.
pub const HISTORY_WINDOW_DAYS: usize = 16;

/// Trailing days of the window that also get a calorie entry.
pub const CALORIE_WINDOW_DAYS: usize = 11;

/// Offset subtracted from the uniform draw; values above 0.5 bias toward loss.
pub const WEIGHT_DRIFT_OFFSET: f64 = 0.3;

/// Scale applied to the offset draw.
pub const WEIGHT_DRIFT_SCALE: f64 = 0.7;

/// Lowest simulated intake as a fraction of the target.
pub const INTAKE_MIN_FRACTION: f64 = 0.8;

/// Width of the simulated intake band (0.8..1.2 of the target).
pub const INTAKE_SPREAD: f64 = 0.4;

// ─────────────────────────────────────────────────────────────────────────────
// Charts
// ─────────────────────────────────────────────────────────────────────────────

/// Padding below the lightest weight so the smallest bar is never empty.
pub const WEIGHT_CHART_PADDING: f64 = 1.0;

/// Default number of trailing days on the charts screen.
pub const DEFAULT_CHART_WINDOW_DAYS: usize = 15;

/// Round half toward positive infinity: `-0.5` becomes `0`, not `-1`.
///
/// Compares the fractional part instead of computing `floor(x + 0.5)`, whose
/// addition rounds `0.49999999999999994` up to `1.0`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round to one decimal place, half toward positive infinity.
pub fn round_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1404.5), 1405.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.6), -2.0);
        assert_eq!(round_half_up(1205.8), 1206.0);
    }

    #[test]
    fn test_round_half_up_just_below_half() {
        let below_half = 0.5 - f64::EPSILON / 4.0;
        assert_eq!(below_half, 0.499_999_999_999_999_94);
        assert_eq!(round_half_up(below_half), 0.0);
        assert_eq!(round_half_up(-below_half), 0.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_round_tenth() {
        assert!((round_tenth(70.04) - 70.0).abs() < 1e-9);
        assert!((round_tenth(69.79) - 69.8).abs() < 1e-9);
        assert!((round_tenth(-0.21) - -0.2).abs() < 1e-9);
    }
}
