//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time steps only
//! - Seeded RNG only
//! - Stable iteration order (actor insertion order)
//! - No rendering, input or platform dependencies

pub mod actor;
pub mod coin;
pub mod fireball;
pub mod level;
pub mod parser;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorId, ActorKind, ActorType};
pub use coin::Spring;
pub use fireball::FireballKind;
pub use level::{Grid, Level, LevelStatus, Obstacle, TouchKind};
pub use parser::{LevelParser, RESERVED_SYMBOLS, Spawn};
pub use tick::{advance, tick};
pub use vector::Vector;
