//! Asteroids headless runner
//!
//! Drives a session at its configured tick rate with a scripted pilot and a
//! logging audio backend, standing in for the windowed front end.
//!
//! Usage: `asteroids [settings.json|-] [max_ticks]`

use std::time::{Duration, Instant};

use asteroids::audio::{AudioManager, LogPlayer};
use asteroids::sim::{GameState, Intent, tick};
use asteroids::{ConfigError, Settings};

/// Two minutes at the default rate
const DEFAULT_MAX_TICKS: u64 = 25 * 120;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next().as_deref() {
        Some("-") | None => Settings::default(),
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            log::info!("Loaded settings from {path}");
            Settings::from_json(&json)?
        }
    };
    let max_ticks = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid {
                field: "max_ticks",
                reason: format!("not a number: {raw}"),
            })?,
        None => DEFAULT_MAX_TICKS,
    };

    log::debug!("Effective settings: {}", settings.to_json()?);

    let mut state = GameState::new(&settings)?;
    let mut audio = AudioManager::new(LogPlayer, &settings);

    log::info!("Asteroids starting ({} ticks max)", max_ticks);

    let clock = Instant::now();
    let mut frame: u64 = 0;
    let mut window_start = Instant::now();
    let mut window_ticks = 0u32;

    while !state.quit {
        let tick_start = Instant::now();

        let intents = if state.phase.is_terminal() || frame >= max_ticks {
            vec![Intent::Quit]
        } else {
            autopilot(frame)
        };
        tick(&mut state, &intents, clock.elapsed().as_secs_f64());
        audio.handle_events(&state.drain_events());
        frame += 1;

        window_ticks += 1;
        let window = window_start.elapsed().as_secs_f32();
        if window >= 1.0 {
            state.report_measured_rate(window_ticks as f32 / window);
            if state.low_tick_rate {
                log::warn!(
                    "Running at {:.1} ticks/s, below target of {}",
                    state.measured_tick_rate,
                    state.tick_rate
                );
            }
            window_ticks = 0;
            window_start = Instant::now();
        }

        let budget = Duration::from_secs_f64(state.tick_interval());
        if let Some(rest) = budget.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    let summary = serde_json::to_string(&state.snapshot().session)?;
    log::info!("Session ended after {frame} ticks: {summary}");
    Ok(())
}

/// Scripted pilot: spin slowly, fire every few ticks, pulse the engine
fn autopilot(frame: u64) -> Vec<Intent> {
    let mut intents = Vec::new();
    match frame {
        // Dismisses the title screen
        0 => intents.push(Intent::Fire),
        1 => intents.push(Intent::TurnLeftOn),
        _ => {}
    }
    if frame > 1 && frame % 4 == 0 {
        intents.push(Intent::Fire);
    }
    match frame % 100 {
        50 => intents.push(Intent::ThrustOn),
        60 => intents.push(Intent::ThrustOff),
        _ => {}
    }
    intents
}
