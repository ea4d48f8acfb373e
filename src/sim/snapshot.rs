//! Read-only view of a session for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::asteroid::AsteroidTier;
use super::ship::ShipVisual;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipSnapshot {
    pub pos: Vec2,
    pub angle: f32,
    pub visual: ShipVisual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidSnapshot {
    pub pos: Vec2,
    pub angle: f32,
    pub tier: AsteroidTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserSnapshot {
    pub start: Vec2,
    pub end: Vec2,
    pub life: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    pub sound_on: bool,
    pub music_on: bool,
    /// Target ticks per second
    pub tick_rate: u32,
    /// Last rate the driver measured
    pub measured_tick_rate: f32,
    pub low_tick_rate: bool,
    pub screen_shake: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ship: ShipSnapshot,
    pub asteroids: Vec<AsteroidSnapshot>,
    pub lasers: Vec<LaserSnapshot>,
    pub stars: Vec<Vec2>,
    pub session: SessionSnapshot,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ship: ShipSnapshot {
                pos: self.ship.pos,
                angle: self.ship.angle,
                visual: self.ship.visual,
            },
            asteroids: self
                .asteroids
                .iter()
                .map(|a| AsteroidSnapshot {
                    pos: a.pos,
                    angle: a.angle,
                    tier: a.tier,
                })
                .collect(),
            lasers: self
                .lasers
                .iter()
                .map(|l| LaserSnapshot {
                    start: l.start,
                    end: l.end,
                    life: l.life,
                })
                .collect(),
            stars: self.stars.iter().map(|s| s.pos).collect(),
            session: SessionSnapshot {
                score: self.score,
                lives: self.lives,
                phase: self.phase,
                sound_on: self.sound_on,
                music_on: self.music_on,
                tick_rate: self.tick_rate,
                measured_tick_rate: self.measured_tick_rate,
                low_tick_rate: self.low_tick_rate,
                screen_shake: self.screen_shake,
            },
        }
    }
}
