use chrono::NaiveDate;

use crate::models::{IntakeProfile, UserData};
use crate::planner::{
    calorie_bar_heights, calorie_progress_percent, calories_remaining, weight_bar_heights,
    weight_progress_percent, ChartWindow,
};

/// Width of a full (100%) bar in characters.
const BAR_WIDTH: usize = 30;

/// Text bar for a 0-100 percentage.
pub fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

/// Summary shown on the last onboarding step.
pub fn display_daily_plan(profile: &IntakeProfile, daily_target: i64) {
    let unit = profile.weight.unit.symbol();

    println!();
    println!("=== Your Daily Plan ===");
    println!();
    println!("  {} kcal  Daily Calorie Target", daily_target);
    println!();
    println!("  Current Weight  {} {}", profile.weight.value, unit);
    match profile.goal_weight {
        Some(goal) => println!("  Goal Weight     {} {}", goal, unit),
        None => println!("  Goal Weight     (not set)"),
    }
    match profile.target_date {
        Some(date) => println!("  Target Date     {}", date),
        None => println!("  Target Date     (not set)"),
    }
    println!();
    println!("With this plan, you can expect to lose about 1-2 lbs per week.");
    println!();
}

/// Target-only output for the `target` command.
pub fn display_target(profile: &IntakeProfile, daily_target: i64) {
    println!(
        "{} kcal/day ({} {}, {} cm, {} y, {}, {})",
        daily_target,
        profile.weight.value,
        profile.weight.unit,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        profile.activity_level
    );
}

/// Today's intake against the budget.
pub fn display_dashboard(user: &UserData, today: NaiveDate) {
    println!();
    println!("=== Dashboard: {} ===", today.format("%B %-d, %Y"));
    println!();

    let Some(latest) = user.calorie_history.last() else {
        println!("No calorie data yet.");
        return;
    };

    let percent = calorie_progress_percent(latest.consumed, latest.budget);
    let remaining = calories_remaining(latest.consumed, latest.budget);

    println!(
        "  Consumed {} of {} kcal  [{}] {:.0}%",
        latest.consumed,
        latest.budget,
        bar(percent, BAR_WIDTH),
        percent
    );
    println!("  {} kcal remaining", remaining);
    println!();
}

/// Weight and calorie charts over the chosen window.
pub fn display_charts(user: &UserData, window: ChartWindow) {
    println!("=== Progress ({}) ===", window);
    println!();

    if let Some(goal) = user.goal_weight {
        match weight_progress_percent(user.start_weight, user.current_weight, goal) {
            Some(percent) => println!(
                "  Goal progress  [{}] {:.0}%  ({} -> {})",
                bar(percent, BAR_WIDTH),
                percent,
                user.start_weight,
                goal
            ),
            None => println!("  Goal progress  (goal equals start weight)"),
        }
        println!();
    }

    let weights = window.slice(&user.weight_history);
    if !weights.is_empty() {
        println!("  Weight");
        for (entry, height) in weights.iter().zip(weight_bar_heights(weights)) {
            println!(
                "  {}  {:>6.1}  {}",
                entry.date.format("%m-%d"),
                entry.weight,
                bar(height, BAR_WIDTH)
            );
        }
        println!();
    }

    let calories = window.slice(&user.calorie_history);
    if !calories.is_empty() {
        println!("  Calories (consumed / budget)");
        for (entry, (consumed, budget)) in calories.iter().zip(calorie_bar_heights(calories)) {
            let marker = if entry.consumed > entry.budget { "!" } else { " " };
            println!(
                "  {}  {:>5}{} {}  budget {:>3.0}%",
                entry.date.format("%m-%d"),
                entry.consumed,
                marker,
                bar(consumed, BAR_WIDTH),
                budget
            );
        }
        println!();
    }
}

/// Account and plan rows shown on the settings screen.
pub fn settings_lines(user: &UserData) -> Vec<String> {
    let name = user.name.as_deref().unwrap_or("(not set)");
    let goal = user
        .goal_weight
        .map_or_else(|| "(not set)".to_string(), |goal| goal.to_string());
    let target_date = user
        .target_date
        .map_or_else(|| "(not set)".to_string(), |date| date.to_string());

    vec![
        format!("  Name                  {}", name),
        format!("  Email                 {}", user.email),
        format!("  Goal Weight           {}", goal),
        format!("  Target Date           {}", target_date),
        format!("  Daily Calorie Budget  {} kcal", user.daily_calories),
    ]
}

pub fn display_settings(user: &UserData) {
    println!();
    println!("=== Settings ===");
    println!();
    for line in settings_lines(user) {
        println!("{}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0.0, 10), "..........");
        assert_eq!(bar(50.0, 10), "#####.....");
        assert_eq!(bar(100.0, 10), "##########");
        assert_eq!(bar(250.0, 4), "####");
        assert_eq!(bar(-20.0, 4), "....");
    }

    #[test]
    fn test_settings_lines() {
        let day = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        let mut user = UserData {
            name: None,
            email: "alex@example.com".to_string(),
            current_weight: 204.5,
            goal_weight: Some(195.0),
            target_date: NaiveDate::from_ymd_opt(2025, 4, 15),
            daily_calories: 1800,
            start_date: day,
            start_weight: 204.5,
            weight_history: Vec::new(),
            calorie_history: Vec::new(),
        };

        let lines = settings_lines(&user);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("(not set)"));
        assert!(lines[1].ends_with("alex@example.com"));
        assert!(lines[2].ends_with("195"));
        assert!(lines[3].ends_with("2025-04-15"));
        assert!(lines[4].ends_with("1800 kcal"));

        user.name = Some("Alex Johnson".to_string());
        user.goal_weight = None;
        let lines = settings_lines(&user);
        assert!(lines[0].ends_with("Alex Johnson"));
        assert!(lines[2].ends_with("(not set)"));
    }
}
