//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (asteroids in insertion order)
//! - Wall-clock time enters only through the `now` argument of [`tick`]
//! - No rendering, audio or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod laser;
pub mod motion;
pub mod ship;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidSpawn, AsteroidTier, SpawnKind, SplitOutcome, Star};
pub use collision::{CollisionReport, laser_hits, resolve_collisions, ship_touches};
pub use laser::Laser;
pub use ship::{Ship, ShipVisual};
pub use snapshot::{AsteroidSnapshot, LaserSnapshot, SessionSnapshot, ShipSnapshot, Snapshot};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Intent, tick};
