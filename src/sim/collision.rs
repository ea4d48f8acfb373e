//! Collision detection and response
//!
//! Two axis-aligned proximity passes run each tick: ship against asteroids,
//! then lasers against asteroids. Removals are only marked during the passes;
//! the populations are compacted once at the end and split children are
//! appended after that, so neither pass sees a rock created this tick.

use glam::Vec2;
use rand::Rng;

use super::asteroid::{Asteroid, SplitOutcome};
use super::laser::Laser;
use super::ship::Ship;
use super::state::{GameEvent, GameState};

/// What the collision passes changed, for the state machine to apply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Ship contacts outside the grace period
    pub lives_lost: u32,
    /// Laser hits (each worth score, whether the rock split or died)
    pub asteroids_shot: u32,
    /// Asteroids removed from the population
    pub asteroids_destroyed: u32,
    pub events: Vec<GameEvent>,
}

/// Box test between the ship and an asteroid, using half sizes of both
#[inline]
pub fn ship_touches(ship_pos: Vec2, ship_size: f32, asteroid: &Asteroid) -> bool {
    let reach = asteroid.size() / 2.0 + ship_size / 2.0;
    let d = (ship_pos - asteroid.pos).abs();
    d.x < reach && d.y < reach
}

/// Box test between a laser tip and an asteroid, using the full asteroid size
#[inline]
pub fn laser_hits(laser: &Laser, asteroid: &Asteroid) -> bool {
    let d = (laser.end - asteroid.pos).abs();
    d.x < asteroid.size() && d.y < asteroid.size()
}

/// Run both passes over the session's entities. Score and lives are left
/// untouched; the returned report carries those outcomes.
pub fn resolve_collisions(state: &mut GameState, now: f64) -> CollisionReport {
    let GameState {
        ship,
        asteroids,
        lasers,
        rng,
        ..
    } = state;
    resolve(ship, asteroids, lasers, rng, now)
}

fn resolve<R: Rng>(
    ship: &mut Ship,
    asteroids: &mut Vec<Asteroid>,
    lasers: &mut Vec<Laser>,
    rng: &mut R,
    now: f64,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut dead = vec![false; asteroids.len()];
    let mut children = Vec::new();

    // --- Ship vs asteroids ---
    for (idx, asteroid) in asteroids.iter_mut().enumerate() {
        if !ship_touches(ship.pos, ship.size(), asteroid) {
            continue;
        }
        if !ship.in_grace(now) {
            report.lives_lost += 1;
            report.events.push(GameEvent::ShipHit);
            log::debug!("Ship hit by {:?} asteroid at {}", asteroid.tier, asteroid.pos);

            // Rock absorbs the ship's momentum
            match asteroid.split_or_destroy(ship.vel, rng) {
                SplitOutcome::Split(child) => children.push(child),
                SplitOutcome::Destroyed => {
                    dead[idx] = true;
                    report.asteroids_destroyed += 1;
                }
            }
        }
        // Every contact refreshes the grace window
        ship.mark_hit(now);
    }

    // --- Lasers vs asteroids ---
    let mut spent = vec![false; lasers.len()];
    for (li, laser) in lasers.iter().enumerate() {
        let Some(idx) = (0..asteroids.len()).find(|&i| !dead[i] && laser_hits(laser, &asteroids[i]))
        else {
            continue;
        };

        spent[li] = true;
        report.asteroids_shot += 1;

        let asteroid = &mut asteroids[idx];
        let tier = asteroid.tier;
        let destroyed = match asteroid.split_or_destroy(laser.impact(), rng) {
            SplitOutcome::Split(child) => {
                children.push(child);
                false
            }
            SplitOutcome::Destroyed => {
                dead[idx] = true;
                report.asteroids_destroyed += 1;
                true
            }
        };
        report
            .events
            .push(GameEvent::AsteroidCracked { tier, destroyed });
        log::debug!("Laser hit {:?} asteroid (destroyed: {})", tier, destroyed);
    }

    // --- Compaction ---
    let expected = asteroids.len() - report.asteroids_destroyed as usize + children.len();
    let mut flags = dead.iter();
    asteroids.retain(|_| !flags.next().copied().unwrap_or(false));
    asteroids.extend(children);
    debug_assert_eq!(asteroids.len(), expected);

    let mut flags = spent.iter();
    lasers.retain(|_| !flags.next().copied().unwrap_or(false));

    report
}
