pub mod prompts;
pub mod render;

pub use prompts::{prompt_step, prompt_yes_no};
pub use render::{
    display_charts, display_daily_plan, display_dashboard, display_settings, display_target,
    settings_lines,
};
