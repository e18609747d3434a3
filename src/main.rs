use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use tally_planner_rs::cli::{parse_profile, Cli, Command, OutputArgs, ProfileArgs};
use tally_planner_rs::error::Result;
use tally_planner_rs::interface::{
    display_charts, display_daily_plan, display_dashboard, display_settings, display_target,
    prompt_step, prompt_yes_no,
};
use tally_planner_rs::logging::init_logging;
use tally_planner_rs::models::{IntakeProfile, SexPolicy, UserData};
use tally_planner_rs::planner::{
    build_plan, compute_daily_calorie_target, compute_daily_calorie_target_with,
    create_user_data, ChartWindow,
};
use tally_planner_rs::state::{
    save_user_data, write_history_csv, Action, AppState, OnboardingStep, Screen,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let command = cli.command.unwrap_or_default();
    debug!(?command, "Parsed command line");

    match command {
        Command::Onboard { output } => cmd_onboard(&output),
        Command::Plan {
            profile,
            output,
            window,
        } => cmd_plan(&profile, &output, &window),
        Command::Target {
            profile,
            strict_sex,
        } => cmd_target(&profile, strict_sex),
    }
}

/// Seeded generator when a seed is given, entropy otherwise.
fn make_rng(output: &OutputArgs) -> StdRng {
    match output.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Write the requested exports.
fn export(user: &UserData, output: &OutputArgs) -> Result<()> {
    if let Some(path) = &output.json {
        save_user_data(path, user)?;
        println!("Saved user data to {}", path.display());
    }
    if let Some(path) = &output.csv {
        write_history_csv(path, &user.plan())?;
        println!("Wrote history to {}", path.display());
    }
    Ok(())
}

/// Run the four-step wizard until the user confirms the daily plan.
fn run_wizard(mut state: AppState) -> Result<(AppState, IntakeProfile)> {
    loop {
        let step = state.onboarding.step;
        println!();
        println!(
            "Tally - Step {} of {}: {}",
            step.number(),
            OnboardingStep::COUNT,
            step.title()
        );

        if !step.is_last() {
            for action in prompt_step(step, &state.onboarding.form)? {
                state = state.apply(action);
            }
            state = state.apply(Action::NextStep);
            continue;
        }

        match state.onboarding.form.to_profile() {
            Ok(profile) => {
                let target = compute_daily_calorie_target(&profile)?;
                display_daily_plan(&profile, target);

                if prompt_yes_no("Get started?", true)? {
                    return Ok((state, profile));
                }
                state = state.apply(Action::PreviousStep);
            }
            Err(e) => {
                println!("{}", e);
                // Back to the first step with biometrics.
                state = state
                    .apply(Action::PreviousStep)
                    .apply(Action::PreviousStep);
            }
        }
    }
}

/// Interactive onboarding followed by the dashboard.
fn cmd_onboard(output: &OutputArgs) -> Result<()> {
    let (state, profile) = run_wizard(AppState::new())?;

    let today = output.today();
    let mut rng = make_rng(output);
    let user = create_user_data(&profile, &state.onboarding.form.email, today, &mut rng)?;

    let mut state = state.apply(Action::CompleteOnboarding(user));
    info!(screen = ?state.screen, "Onboarding complete");

    loop {
        let Some(user) = state.user.as_ref() else {
            break;
        };

        match state.screen {
            Screen::Dashboard => display_dashboard(user, today),
            Screen::Charts => display_charts(user, ChartWindow::default()),
            Screen::Settings => {
                display_settings(user);
                if prompt_yes_no("Log out?", false)? {
                    export(user, output)?;
                    state = state.apply(Action::Logout);
                    info!(screen = ?state.screen, "Logged out");
                    break;
                }
                state = state.apply(Action::Navigate(Screen::Dashboard));
                continue;
            }
            Screen::Onboarding => break,
        }

        if state.screen == Screen::Dashboard {
            if prompt_yes_no("Show charts?", true)? {
                state = state.apply(Action::Navigate(Screen::Charts));
                continue;
            }
            if prompt_yes_no("Open settings?", false)? {
                state = state.apply(Action::Navigate(Screen::Settings));
                continue;
            }
        }

        if prompt_yes_no("Regenerate history?", false)? {
            let plan = build_plan(&profile, today, &mut rng)?;
            state = state
                .apply(Action::RegeneratePlan(plan))
                .apply(Action::Navigate(Screen::Dashboard));
            continue;
        }

        break;
    }

    if let Some(user) = state.user.as_ref() {
        export(user, output)?;
    }

    Ok(())
}

/// Non-interactive plan from command-line biometrics.
fn cmd_plan(profile_args: &ProfileArgs, output: &OutputArgs, window: &str) -> Result<()> {
    let profile = parse_profile(profile_args)?;
    let window: ChartWindow = window.parse()?;

    let today = output.today();
    let mut rng = make_rng(output);
    let user = create_user_data(&profile, &profile_args.email, today, &mut rng)?;

    display_daily_plan(&profile, user.daily_calories);
    display_dashboard(&user, today);
    display_charts(&user, window);

    export(&user, output)
}

/// Print the calorie target only.
fn cmd_target(profile_args: &ProfileArgs, strict_sex: bool) -> Result<()> {
    let profile = parse_profile(profile_args)?;
    let policy = if strict_sex {
        SexPolicy::Strict
    } else {
        SexPolicy::FemaleFallback
    };

    let target = compute_daily_calorie_target_with(&profile, policy)?;
    display_target(&profile, target);
    Ok(())
}
