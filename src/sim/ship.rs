//! The player's ship
//!
//! Control flags are latched: a press sets them, a release clears them, and
//! [`Ship::update`] reads them once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion;
use crate::consts::*;
use crate::{heading, playfield_center};

/// Sprite the presentation layer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShipVisual {
    #[default]
    Normal,
    Boosting,
    Hit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing in degrees, 0 = up, positive = counter-clockwise
    pub angle: f32,
    pub thrust: bool,
    pub turning_left: bool,
    pub turning_right: bool,
    /// In the post-collision grace state
    pub hit: bool,
    /// Wall-clock seconds of the most recent contact
    pub hit_time: f64,
    pub visual: ShipVisual,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

impl Ship {
    /// Ship at the playfield center, at rest, facing up
    pub fn new() -> Self {
        Self {
            pos: playfield_center(),
            vel: Vec2::ZERO,
            angle: 0.0,
            thrust: false,
            turning_left: false,
            turning_right: false,
            hit: false,
            hit_time: 0.0,
            visual: ShipVisual::Normal,
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        SHIP_SIZE
    }

    pub fn set_thrust(&mut self, on: bool) {
        self.thrust = on;
    }

    pub fn set_turn_left(&mut self, on: bool) {
        self.turning_left = on;
    }

    pub fn set_turn_right(&mut self, on: bool) {
        self.turning_right = on;
    }

    pub fn stop_turning(&mut self) {
        self.turning_left = false;
        self.turning_right = false;
    }

    /// Enter (or refresh) the hit state
    pub fn mark_hit(&mut self, now: f64) {
        self.hit = true;
        self.hit_time = now;
    }

    /// Still protected at `now` by the most recent contact
    #[inline]
    pub fn in_grace(&self, now: f64) -> bool {
        self.hit && now - self.hit_time < HIT_GRACE_SECS
    }

    /// Advance one tick; `now` is wall-clock seconds
    pub fn update(&mut self, now: f64) {
        if !self.in_grace(now) {
            self.hit = false;
        }

        self.visual = if self.hit {
            // Engine cuts out until thrust is pressed again
            self.thrust = false;
            ShipVisual::Hit
        } else if self.thrust {
            ShipVisual::Boosting
        } else {
            ShipVisual::Normal
        };

        self.pos = motion::advance(self.pos, self.vel, SHIP_WRAP_MARGIN);

        if self.turning_left {
            self.angle += SHIP_TURN_RATE;
        } else if self.turning_right {
            self.angle -= SHIP_TURN_RATE;
        }

        if self.thrust {
            self.vel += heading(self.angle);
        } else {
            self.vel = Vec2::new(apply_drag(self.vel.x), apply_drag(self.vel.y));
        }
    }
}

/// Step one velocity component toward zero, clamping instead of overshooting
#[inline]
fn apply_drag(v: f32) -> f32 {
    if v.abs() <= SHIP_DRAG {
        0.0
    } else {
        v - SHIP_DRAG * v.signum()
    }
}
