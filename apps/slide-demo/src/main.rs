//! Replays scripted slide gestures through an interactive transition
//! controller and logs what the transition would do.
//!
//! Usage: `slide-demo [scenario ...]` (all scenarios when none are named).
//! `SEGUE_COMPLETION_CUTOFF` and `SEGUE_FLICK_VELOCITY` override the release
//! thresholds; `RUST_LOG=debug` shows controller internals.

mod console_context;
mod recognizer;
mod scenarios;

use anyhow::{anyhow, bail, Context, Result};
use segue_transition::{InteractiveTransitionController, TransitionConfig};

use console_context::ConsoleTransitionContext;
use recognizer::ReplayRecognizer;
use scenarios::{Ending, Scenario, SCENARIOS};

const CUTOFF_ENV: &str = "SEGUE_COMPLETION_CUTOFF";
const FLICK_ENV: &str = "SEGUE_FLICK_VELOCITY";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config_from_env()?;
    let names: Vec<String> = std::env::args().skip(1).collect();
    let selected: Vec<&Scenario> = if names.is_empty() {
        SCENARIOS.iter().collect()
    } else {
        names
            .iter()
            .map(|name| {
                scenarios::find(name).ok_or_else(|| {
                    let known: Vec<_> = SCENARIOS.iter().map(|s| s.name).collect();
                    anyhow!("unknown scenario '{name}' (known: {})", known.join(", "))
                })
            })
            .collect::<Result<_>>()?
    };

    for scenario in selected {
        run(scenario, config)?;
    }
    Ok(())
}

fn config_from_env() -> Result<TransitionConfig> {
    let mut config = TransitionConfig::default();
    if let Some(cutoff) = read_env_f32(CUTOFF_ENV)? {
        config = config.with_completion_cutoff(cutoff);
    }
    if let Some(velocity) = read_env_f32(FLICK_ENV)? {
        config = config.with_flick_velocity(velocity);
    }
    config.validate().context("invalid transition configuration")?;
    Ok(config)
}

fn read_env_f32(key: &str) -> Result<Option<f32>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f32>()
            .map(Some)
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("cannot read {key}")),
    }
}

fn run(scenario: &Scenario, config: TransitionConfig) -> Result<()> {
    log::info!(
        "== {} ({}, slide {})",
        scenario.name,
        scenario.summary,
        scenario.direction.as_str()
    );

    let recognizer = ReplayRecognizer::new(scenario.direction);
    let mut controller = InteractiveTransitionController::builder()
        .gesture_source(&recognizer)
        .config(config)
        .build()?;
    let mut context = ConsoleTransitionContext::new(scenario.name, scenario.container);

    for sample in scenario.samples() {
        recognizer.deliver(sample);
        controller
            .pump(&mut context)
            .with_context(|| format!("scenario '{}' broke the gesture protocol", scenario.name))?;
    }

    if let Ending::Teardown = scenario.ending {
        log::info!("[{}] owner torn down mid-gesture", scenario.name);
        controller.force_cancel(&mut context);
    }

    let Some(decision) = controller.last_decision() else {
        bail!("scenario '{}' ended without a decision", scenario.name);
    };
    log::info!(
        "[{}] {:?} via {:?} at {:.1}% ({:.1}% left to animate, release {:+.2}/s)",
        scenario.name,
        decision.completion,
        decision.reason,
        decision.percent_complete * 100.0,
        decision.remaining_fraction() * 100.0,
        decision.release_velocity
    );
    debug_assert_eq!(context.outcome(), Some(decision.completion));
    Ok(())
}
