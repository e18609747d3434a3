use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TallyError};
use crate::models::{CalorieEntry, WeightEntry};
use crate::planner::constants::{DEFAULT_CHART_WINDOW_DAYS, WEIGHT_CHART_PADDING};

/// Share of the planned loss achieved so far, in percent.
///
/// `None` when start and goal coincide. Not clamped: gaining weight gives a
/// negative value, passing the goal gives more than 100.
pub fn weight_progress_percent(start: f64, current: f64, goal: f64) -> Option<f64> {
    let planned = start - goal;
    if planned == 0.0 {
        return None;
    }
    Some((start - current) / planned * 100.0)
}

/// Consumed share of the daily budget, in percent, capped at 100.
pub fn calorie_progress_percent(consumed: i64, budget: i64) -> f64 {
    if budget <= 0 {
        return 0.0;
    }
    (consumed as f64 / budget as f64 * 100.0).min(100.0)
}

/// Calories left for the day; negative once the budget is exceeded.
pub fn calories_remaining(consumed: i64, budget: i64) -> i64 {
    budget - consumed
}

/// Bar heights (0-100) for the weight chart.
///
/// The floor sits one unit below the lightest weight so the lowest bar stays
/// visible.
pub fn weight_bar_heights(entries: &[WeightEntry]) -> Vec<f64> {
    let max = entries.iter().map(|e| e.weight).fold(f64::MIN, f64::max);
    let floor = entries.iter().map(|e| e.weight).fold(f64::MAX, f64::min) - WEIGHT_CHART_PADDING;
    let range = max - floor;

    entries
        .iter()
        .map(|e| (e.weight - floor) / range * 100.0)
        .collect()
}

/// `(consumed, budget)` bar heights (0-100) for the calorie chart, relative
/// to the largest value of either kind.
pub fn calorie_bar_heights(entries: &[CalorieEntry]) -> Vec<(f64, f64)> {
    let max = entries
        .iter()
        .map(|e| e.consumed.max(e.budget))
        .max()
        .unwrap_or(0);

    if max <= 0 {
        return vec![(0.0, 0.0); entries.len()];
    }

    let max = max as f64;
    entries
        .iter()
        .map(|e| (e.consumed as f64 / max * 100.0, e.budget as f64 / max * 100.0))
        .collect()
}

/// How many trailing days the charts screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartWindow {
    Week,
    HalfMonth,
    Month,
}

impl ChartWindow {
    pub fn days(&self) -> usize {
        match self {
            ChartWindow::Week => 7,
            ChartWindow::HalfMonth => DEFAULT_CHART_WINDOW_DAYS,
            ChartWindow::Month => 30,
        }
    }

    /// The last `days()` entries of `series` (all of it if shorter).
    pub fn slice<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        let keep = self.days().min(series.len());
        &series[series.len() - keep..]
    }
}

impl Default for ChartWindow {
    fn default() -> Self {
        ChartWindow::HalfMonth
    }
}

impl fmt::Display for ChartWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days())
    }
}

impl FromStr for ChartWindow {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "7" => Ok(ChartWindow::Week),
            "15" => Ok(ChartWindow::HalfMonth),
            "30" => Ok(ChartWindow::Month),
            other => Err(TallyError::numeric("chart window", other)),
        }
    }
}
