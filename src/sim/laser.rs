//! Laser shots

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{LASER_LENGTH, LASER_LIFE, LASER_SPEED};
use crate::heading;

/// A short line segment travelling in a fixed direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    /// Tail of the segment
    pub start: Vec2,
    /// Tip of the segment (used for hit tests)
    pub end: Vec2,
    /// Firing direction in degrees, fixed at fire time
    pub angle: f32,
    /// Ship velocity when fired
    pub ship_vel: Vec2,
    /// Ticks left before expiry
    pub life: u32,
}

impl Laser {
    pub fn new(pos: Vec2, angle: f32, ship_vel: Vec2) -> Self {
        Self {
            start: pos,
            end: pos + heading(angle) * LASER_LENGTH,
            angle,
            ship_vel,
            life: LASER_LIFE,
        }
    }

    /// Per-tick displacement of both endpoints
    #[inline]
    pub fn step(&self) -> Vec2 {
        (heading(self.angle) + self.ship_vel / 10.0) * LASER_SPEED
    }

    pub fn update(&mut self) {
        self.life = self.life.saturating_sub(1);
        let step = self.step();
        self.start += step;
        self.end += step;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life == 0
    }

    /// Velocity nudge given to an asteroid this laser hits
    #[inline]
    pub fn impact(&self) -> Vec2 {
        (self.end - self.start) / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laser_tip_ahead_of_tail() {
        let laser = Laser::new(Vec2::new(400.0, 300.0), 0.0, Vec2::ZERO);
        assert_eq!(laser.start, Vec2::new(400.0, 300.0));
        assert!((laser.end.y - 290.0).abs() < 1e-5);
        assert_eq!(laser.life, LASER_LIFE);
    }

    #[test]
    fn test_laser_moves_with_inherited_velocity() {
        let mut laser = Laser::new(Vec2::new(400.0, 300.0), 0.0, Vec2::new(10.0, 0.0));
        laser.update();
        assert_eq!(laser.life, LASER_LIFE - 1);
        // (0, -1) + (1, 0) scaled by 15
        assert!((laser.start.x - 415.0).abs() < 1e-4);
        assert!((laser.start.y - 285.0).abs() < 1e-4);
        assert!((laser.end - laser.start - Vec2::new(0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn test_laser_expires_after_its_life() {
        let mut laser = Laser::new(Vec2::ZERO, 90.0, Vec2::ZERO);
        for _ in 0..LASER_LIFE - 1 {
            laser.update();
            assert!(!laser.is_expired());
        }
        laser.update();
        assert!(laser.is_expired());
        laser.update();
        assert_eq!(laser.life, 0);
    }

    #[test]
    fn test_impact_points_along_shot() {
        let laser = Laser::new(Vec2::ZERO, 90.0, Vec2::ZERO);
        let impact = laser.impact();
        assert!((impact.x + 1.0).abs() < 1e-5);
        assert!(impact.y.abs() < 1e-5);
    }
}
