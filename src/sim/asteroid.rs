//! Asteroids and background stars
//!
//! Both are spawned from the same placement rule, told apart by [`SpawnKind`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::motion;
use crate::consts::*;

/// Discrete asteroid sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Small,
    Medium,
    Large,
}

impl AsteroidTier {
    pub const ALL: [AsteroidTier; 3] = [AsteroidTier::Small, AsteroidTier::Medium, AsteroidTier::Large];

    /// Edge length in playfield units (8, 16 or 32)
    #[inline]
    pub fn size(self) -> f32 {
        match self {
            AsteroidTier::Small => 8.0,
            AsteroidTier::Medium => 16.0,
            AsteroidTier::Large => 32.0,
        }
    }

    /// Tier produced by halving, `None` for the smallest tier
    pub fn split(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> AsteroidTier {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// What a spawned body is, which decides where it may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    /// Gameplay rock, kept out of the band around the ship start
    Asteroid,
    /// Decorative star, placed anywhere
    Star,
}

/// Random spawn position for a body of the given kind
pub fn spawn_position<R: Rng>(kind: SpawnKind, rng: &mut R) -> Vec2 {
    let x = rng.random_range(0..=PLAYFIELD_WIDTH as i32) as f32;
    let y = match kind {
        SpawnKind::Star => rng.random_range(0..=PLAYFIELD_HEIGHT as i32) as f32,
        SpawnKind::Asteroid => {
            let center = (PLAYFIELD_HEIGHT / 2.0) as i32;
            let band = SPAWN_EXCLUSION_HALF_HEIGHT as i32;
            if rng.random_bool(0.5) {
                rng.random_range(0..=center - band) as f32
            } else {
                rng.random_range(center + band..=PLAYFIELD_HEIGHT as i32) as f32
            }
        }
    };
    Vec2::new(x, y)
}

/// Optional overrides for [`Asteroid::spawn`]; unset fields are randomized
#[derive(Debug, Clone, Copy, Default)]
pub struct AsteroidSpawn {
    pub tier: Option<AsteroidTier>,
    pub pos: Option<Vec2>,
    pub vel: Option<Vec2>,
}

/// Result of hitting an asteroid
#[derive(Debug, Clone)]
pub enum SplitOutcome {
    /// Parent was halved in place; the child must be added to the population
    Split(Asteroid),
    /// Asteroid was already the smallest tier and must be removed
    Destroyed,
}

/// A tumbling rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: AsteroidTier,
    /// Rotation in degrees (unbounded)
    pub angle: f32,
    /// Degrees added to `angle` each tick
    pub spin: f32,
}

impl Asteroid {
    pub fn spawn<R: Rng>(spawn: AsteroidSpawn, rng: &mut R) -> Self {
        let tier = spawn.tier.unwrap_or_else(|| AsteroidTier::random(rng));
        let pos = spawn
            .pos
            .unwrap_or_else(|| spawn_position(SpawnKind::Asteroid, rng));
        let vel = spawn.vel.unwrap_or_else(|| {
            Vec2::new(
                rng.random_range(-ASTEROID_MAX_SPAWN_SPEED..=ASTEROID_MAX_SPAWN_SPEED) as f32,
                rng.random_range(-ASTEROID_MAX_SPAWN_SPEED..=ASTEROID_MAX_SPAWN_SPEED) as f32,
            )
        });
        let spin = rng.random_range(ASTEROID_MIN_SPIN..=ASTEROID_MAX_SPIN) as f32;

        Self {
            pos,
            vel,
            tier,
            angle: 0.0,
            spin,
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.tier.size()
    }

    /// Advance position and rotation by one tick
    pub fn update(&mut self) {
        self.pos = motion::advance(self.pos, self.vel, self.size());
        self.angle += self.spin;
    }

    /// Halve this asteroid and nudge it by `impact`, or report it destroyed.
    ///
    /// The child appears at the parent's position with the halved tier and a
    /// freshly rolled velocity.
    pub fn split_or_destroy<R: Rng>(&mut self, impact: Vec2, rng: &mut R) -> SplitOutcome {
        let Some(smaller) = self.tier.split() else {
            return SplitOutcome::Destroyed;
        };

        self.tier = smaller;
        self.vel += impact;

        let child = Asteroid::spawn(
            AsteroidSpawn {
                tier: Some(smaller),
                pos: Some(self.pos),
                vel: None,
            },
            rng,
        );
        log::debug!("Asteroid split into two {:?} at {}", smaller, self.pos);
        SplitOutcome::Split(child)
    }
}

/// Background star drifting against the ship's motion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Star {
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self {
            pos: spawn_position(SpawnKind::Star, rng),
            vel: Vec2::ZERO,
        }
    }

    /// Parallax step: velocity follows the ship, scaled down and reversed
    pub fn update(&mut self, ship_vel: Vec2) {
        self.vel = -ship_vel / STAR_PARALLAX_DIVISOR;
        self.pos = motion::advance(self.pos, self.vel, STAR_SIZE);
    }
}
