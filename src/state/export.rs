use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{PlanResult, UserData};

/// Save a user record as pretty-printed JSON.
pub fn save_user_data<P: AsRef<Path>>(path: P, user: &UserData) -> Result<()> {
    let json = serde_json::to_string_pretty(user)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "Saved user data");
    Ok(())
}

/// Load a user record previously written by [`save_user_data`].
pub fn load_user_data<P: AsRef<Path>>(path: P) -> Result<UserData> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write both series as one CSV row per day of the window.
///
/// Days older than the calorie window leave `consumed` and `budget` empty.
pub fn write_history_csv<P: AsRef<Path>>(path: P, plan: &PlanResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["date", "weight", "consumed", "budget"])?;

    for entry in &plan.weight_history {
        let calories = plan.calorie_history.iter().find(|c| c.date == entry.date);
        wtr.write_record([
            entry.date.to_string(),
            format!("{:.1}", entry.weight),
            calories.map(|c| c.consumed.to_string()).unwrap_or_default(),
            calories.map(|c| c.budget.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.as_ref().display(), rows = plan.weight_history.len(), "Wrote history CSV");
    Ok(())
}
