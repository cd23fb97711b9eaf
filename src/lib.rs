//! Lava Run - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, actors, level state, layout parsing)
//! - `settings`: Data-driven configuration
//! - `error`: Contract and configuration errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

use glam::Vec2;

use sim::Vector;

/// Game configuration constants
pub mod consts {
    /// Largest time slice a driver should feed to a single tick (seconds)
    pub const MAX_STEP: f32 = 0.05;
    /// Time a decided level keeps running before it reports finished
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player box, offset up by half a cell so the sprite stands on the spawn tile
    pub const PLAYER_SIZE: (f32, f32) = (0.8, 1.5);
    pub const PLAYER_OFFSET: (f32, f32) = (0.0, -0.5);

    /// Fireballs occupy exactly one cell
    pub const FIREBALL_SIZE: (f32, f32) = (1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: (f32, f32) = (2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: (f32, f32) = (0.0, 2.0);
    pub const FIRE_RAIN_SPEED: (f32, f32) = (0.0, 3.0);

    /// Coin box, inset within its cell
    pub const COIN_SIZE: (f32, f32) = (0.6, 0.6);
    pub const COIN_OFFSET: (f32, f32) = (0.2, 0.1);
    /// Spring phase advance per unit of time (radians)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Vertical bobbing amplitude
    pub const COIN_SPRING_DIST: f32 = 0.07;
}

/// Build a `Vector` from one of the `(x, y)` constants above
#[inline]
pub const fn vector(pair: (f32, f32)) -> Vector {
    Vector::new(pair.0, pair.1)
}

/// Cell range covered by `[min, max)` along both axes, as `(start, end)` corners.
///
/// The end corner is exclusive: a box whose edge lies exactly on a cell
/// boundary does not reach into the next cell.
#[inline]
pub fn covered_cells(min: Vec2, max: Vec2) -> (Vec2, Vec2) {
    (min.floor(), max.ceil())
}
