//! Asteroids - a wrap-around arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (motion, entities, collisions, game state machine)
//! - `settings`: Session configuration
//! - `audio`: Mapping of game events to sound effects
//! - `error`: Configuration errors
//!
//! Rendering, raw input capture and asset loading live outside this crate. The
//! simulation hands out plain [`sim::Snapshot`] data and accepts [`sim::Intent`]s.

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ship footprint (half the sprite width, used for collision boxes)
    pub const SHIP_SIZE: f32 = 16.0;
    /// Wrap margin for the ship, independent of its size
    pub const SHIP_WRAP_MARGIN: f32 = 10.0;
    /// Degrees per tick while a turn flag is latched
    pub const SHIP_TURN_RATE: f32 = 6.0;
    /// Per-axis velocity decay per tick while not thrusting
    pub const SHIP_DRAG: f32 = 0.05;
    /// Wall-clock seconds the ship stays in its hit state
    pub const HIT_GRACE_SECS: f64 = 1.0;

    /// Laser lifetime in ticks
    pub const LASER_LIFE: u32 = 100;
    /// Laser travel multiplier per tick
    pub const LASER_SPEED: f32 = 15.0;
    /// Distance from the laser tail to its tip
    pub const LASER_LENGTH: f32 = 10.0;

    /// Points per laser hit, whether the rock splits or dies
    pub const SCORE_PER_HIT: u64 = 1000;

    /// Asteroid spawn velocity range (integer components in -N..=N)
    pub const ASTEROID_MAX_SPAWN_SPEED: i32 = 3;
    /// Asteroid spin range (degrees per tick)
    pub const ASTEROID_MIN_SPIN: i32 = 1;
    pub const ASTEROID_MAX_SPIN: i32 = 5;
    /// Half height of the band around the ship start kept clear at spawn
    pub const SPAWN_EXCLUSION_HALF_HEIGHT: f32 = 100.0;

    /// Background star size (and wrap margin)
    pub const STAR_SIZE: f32 = 1.0;
    /// Stars drift at ship velocity divided by this
    pub const STAR_PARALLAX_DIVISOR: f32 = 10.0;

    /// Horizontal shake amplitude while the ship is hit
    pub const SCREEN_SHAKE: f32 = 5.0;
    /// Target minus measured tick rate above which the rate counts as low
    pub const LOW_RATE_THRESHOLD: f32 = 2.0;

    /// Upper bounds accepted by configuration
    pub const MAX_ASTEROIDS: u32 = 500;
    pub const MAX_STARS: u32 = 1000;
}

/// Unit heading for an angle in degrees, in screen coordinates (y grows down).
///
/// Angle 0 points up and positive angles turn counter-clockwise on screen,
/// i.e. the `(-sin, cos)` convention with the y axis flipped.
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(-rad.sin(), -rad.cos())
}

/// Ship start position (playfield center)
#[inline]
pub fn playfield_center() -> Vec2 {
    Vec2::new(consts::PLAYFIELD_WIDTH / 2.0, consts::PLAYFIELD_HEIGHT / 2.0)
}
