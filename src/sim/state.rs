//! Session state and core simulation types
//!
//! [`GameState`] owns every entity collection and the score/life counters.
//! Entities never touch those counters; the tick reads their outcomes and
//! applies them here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidSpawn, AsteroidTier, Star};
use super::laser::Laser;
use super::ship::Ship;
use crate::consts::LOW_RATE_THRESHOLD;
use crate::error::Result;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, left on the first intent of any kind
    NotStarted,
    /// Active gameplay
    Running,
    /// Simulation frozen
    Paused,
    /// Lives ran out
    GameOver,
    /// Every asteroid destroyed
    Win,
}

impl GamePhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Things that happened during a tick, for the audio and presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LaserFired,
    /// Thrust pressed while the ship was not in its hit state
    ThrustStarted,
    /// Ship lost a life
    ShipHit,
    AsteroidCracked { tier: AsteroidTier, destroyed: bool },
    PhaseChanged { from: GamePhase, to: GamePhase },
    SoundToggled(bool),
    MusicToggled(bool),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Settings the session was built from (restart targets)
    pub settings: Settings,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Asteroids in insertion order
    pub asteroids: Vec<Asteroid>,
    pub lasers: Vec<Laser>,
    pub stars: Vec<Star>,
    pub sound_on: bool,
    pub music_on: bool,
    /// Target ticks per second
    pub tick_rate: u32,
    /// Rate the driver last reported achieving
    pub measured_tick_rate: f32,
    /// Driver reported a measured rate well under target
    pub low_tick_rate: bool,
    /// Horizontal shake offset for this tick
    pub screen_shake: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Quit intent received; the driver should stop ticking
    pub quit: bool,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Build a session from validated settings
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let mut state = Self {
            settings: settings.clone(),
            score: 0,
            lives: settings.lives,
            phase: GamePhase::NotStarted,
            ship: Ship::new(),
            asteroids: Vec::with_capacity(settings.asteroid_count as usize * 2),
            lasers: Vec::new(),
            stars: Vec::with_capacity(settings.star_count as usize),
            sound_on: settings.sound_on,
            music_on: settings.music_on,
            tick_rate: settings.tick_rate,
            measured_tick_rate: settings.tick_rate as f32,
            low_tick_rate: false,
            screen_shake: 0.0,
            time_ticks: 0,
            quit: false,
            rng: Pcg32::seed_from_u64(settings.seed),
            events: Vec::new(),
        };
        state.populate();

        log::info!(
            "Session created: {} asteroids, {} lives, seed {}",
            settings.asteroid_count,
            settings.lives,
            settings.seed
        );
        Ok(state)
    }

    /// Reset ship, stars and asteroids to the configured counts
    fn populate(&mut self) {
        self.ship = Ship::new();
        self.lasers.clear();

        self.stars.clear();
        for _ in 0..self.settings.star_count {
            self.stars.push(Star::spawn(&mut self.rng));
        }

        self.asteroids.clear();
        for _ in 0..self.settings.asteroid_count {
            self.asteroids
                .push(Asteroid::spawn(AsteroidSpawn::default(), &mut self.rng));
        }
    }

    /// Reset score, lives and all entities; the phase is left to the caller
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.settings.lives;
        self.screen_shake = 0.0;
        self.populate();
        log::info!("Session restarted");
    }

    /// Move to `to`, emitting a phase event if it differs
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
        log::info!("Phase {:?} -> {:?} (score {}, lives {})", from, to, self.score, self.lives);
    }

    /// Record the tick rate the driver actually achieved
    pub fn report_measured_rate(&mut self, measured: f32) {
        self.measured_tick_rate = measured;
        self.low_tick_rate = self.tick_rate as f32 - measured > LOW_RATE_THRESHOLD;
    }

    /// Seconds one tick should take at the current target rate
    #[inline]
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    /// Events emitted during the last tick, unless already drained
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_counts() {
        let settings = Settings {
            asteroid_count: 7,
            star_count: 12,
            lives: 4,
            ..Default::default()
        };
        let state = GameState::new(&settings).expect("valid settings");
        assert_eq!(state.asteroids.len(), 7);
        assert_eq!(state.stars.len(), 12);
        assert_eq!(state.lives, 4);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.lasers.is_empty());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            lives: 0,
            ..Default::default()
        };
        assert!(GameState::new(&settings).is_err());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let settings = Settings::default();
        let a = GameState::new(&settings).expect("valid");
        let b = GameState::new(&settings).expect("valid");
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.tier, y.tier);
        }
    }

    #[test]
    fn test_set_phase_emits_once() {
        let mut state = GameState::new(&Settings::default()).expect("valid");
        state.set_phase(GamePhase::Running);
        state.set_phase(GamePhase::Running);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::NotStarted,
                to: GamePhase::Running
            }]
        );
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_low_tick_rate_flag() {
        let mut state = GameState::new(&Settings::default()).expect("valid");
        state.report_measured_rate(24.0);
        assert!(!state.low_tick_rate);
        state.report_measured_rate(20.0);
        assert!(state.low_tick_rate);
        assert_eq!(state.measured_tick_rate, 20.0);
    }
}
