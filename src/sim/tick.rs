//! Per-tick session driver
//!
//! Order while running: apply queued intents, resolve collisions, apply their
//! outcomes to score and lives, move every entity, then check for the end of
//! the game. Other phases only process intents.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::laser::Laser;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{SCORE_PER_HIT, SCREEN_SHAKE};

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    TurnLeftOn,
    TurnLeftOff,
    TurnRightOn,
    TurnRightOff,
    ThrustOn,
    ThrustOff,
    Fire,
    PauseToggle,
    Restart,
    Quit,
    SpeedUp,
    SpeedDown,
    ToggleSound,
    ToggleMusic,
}

/// Advance the session by one tick. `now` is wall-clock seconds and only
/// drives the ship's hit grace period.
///
/// Events left over from the previous tick are discarded; hosts read or
/// drain them between calls.
pub fn tick(state: &mut GameState, intents: &[Intent], now: f64) {
    state.events.clear();
    if state.quit {
        return;
    }

    for &intent in intents {
        apply_intent(state, intent);
        if state.quit {
            return;
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    let report = resolve_collisions(state, now);
    state.lives = state.lives.saturating_sub(report.lives_lost);
    state.score += SCORE_PER_HIT * report.asteroids_shot as u64;
    state.events.extend(report.events);

    for asteroid in &mut state.asteroids {
        asteroid.update();
    }
    let ship_vel = state.ship.vel;
    for star in &mut state.stars {
        star.update(ship_vel);
    }
    for laser in &mut state.lasers {
        laser.update();
    }
    state.lasers.retain(|l| !l.is_expired());
    state.ship.update(now);

    state.screen_shake = if !state.ship.hit {
        0.0
    } else if state.screen_shake > 0.0 {
        -SCREEN_SHAKE
    } else {
        SCREEN_SHAKE
    };

    if state.lives < 1 {
        state.set_phase(GamePhase::GameOver);
    } else if state.asteroids.is_empty() {
        state.set_phase(GamePhase::Win);
    }
}

fn apply_intent(state: &mut GameState, intent: Intent) {
    match intent {
        Intent::Quit => {
            log::info!("Quit requested");
            state.quit = true;
            return;
        }
        Intent::Restart => {
            state.restart();
            state.set_phase(GamePhase::Running);
            return;
        }
        _ => {}
    }

    // The first key only dismisses the title screen
    if state.phase == GamePhase::NotStarted {
        state.set_phase(GamePhase::Running);
        return;
    }

    match intent {
        Intent::TurnLeftOn => state.ship.set_turn_left(true),
        Intent::TurnLeftOff => state.ship.set_turn_left(false),
        Intent::TurnRightOn => state.ship.set_turn_right(true),
        Intent::TurnRightOff => state.ship.set_turn_right(false),
        Intent::ThrustOn => {
            state.ship.set_thrust(true);
            if !state.ship.hit {
                state.emit(GameEvent::ThrustStarted);
            }
        }
        Intent::ThrustOff => state.ship.set_thrust(false),
        Intent::Fire => fire_laser(state),
        Intent::PauseToggle => match state.phase {
            GamePhase::Running => state.set_phase(GamePhase::Paused),
            GamePhase::Paused => state.set_phase(GamePhase::Running),
            _ => log::trace!("Pause ignored in {:?}", state.phase),
        },
        Intent::SpeedUp => {
            if state.tick_rate < state.settings.max_tick_rate {
                state.tick_rate += 1;
                log::debug!("Tick rate {}", state.tick_rate);
            }
        }
        Intent::SpeedDown => {
            if state.tick_rate > state.settings.min_tick_rate {
                state.tick_rate -= 1;
                log::debug!("Tick rate {}", state.tick_rate);
            }
        }
        Intent::ToggleSound => {
            state.sound_on = !state.sound_on;
            state.emit(GameEvent::SoundToggled(state.sound_on));
        }
        Intent::ToggleMusic => {
            state.music_on = !state.music_on;
            state.emit(GameEvent::MusicToggled(state.music_on));
        }
        Intent::Quit | Intent::Restart => {}
    }
}

fn fire_laser(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        log::trace!("Fire ignored in {:?}", state.phase);
        return;
    }
    let ship = &state.ship;
    let laser = Laser::new(ship.pos, ship.angle, ship.vel);
    log::debug!("Laser fired at {} deg ({} in flight)", laser.angle, state.lasers.len() + 1);
    state.lasers.push(laser);
    state.emit(GameEvent::LaserFired);
}
