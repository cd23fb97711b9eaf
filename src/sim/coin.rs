//! Coins: collectibles that bob on a spring around a fixed anchor

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::vector::Vector;
use crate::consts::*;
use crate::vector;

/// Vertical bobbing state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Rest position the coin oscillates around
    pub anchor: Vector,
    /// Current phase (radians)
    pub phase: f32,
    /// Phase advance per unit of time
    pub speed: f32,
    /// Amplitude
    pub dist: f32,
}

impl Spring {
    pub fn new(anchor: Vector, phase: f32) -> Self {
        Self {
            anchor,
            phase,
            speed: COIN_SPRING_SPEED,
            dist: COIN_SPRING_DIST,
        }
    }

    pub fn advance(&mut self, time: f32) {
        self.phase += self.speed * time;
    }

    /// Current displacement from the anchor
    pub fn offset(&self) -> Vector {
        Vector::new(0.0, self.dist * self.phase.sin())
    }
}

impl Actor {
    /// Coin on the cell at `pos`, starting at a random spring phase
    pub fn coin<R: Rng>(pos: Vector, rng: &mut R) -> Self {
        let phase = rng.random_range(0.0..TAU);
        Self::coin_with_phase(pos, phase)
    }

    pub fn coin_with_phase(pos: Vector, phase: f32) -> Self {
        let anchor = pos.plus(vector(COIN_OFFSET));
        Self::with_kind(
            anchor,
            vector(COIN_SIZE),
            Vector::ZERO,
            ActorKind::Coin(Spring::new(anchor, phase)),
        )
    }

    /// Advance the spring phase; no-op for anything but a coin
    pub fn update_spring(&mut self, time: f32) {
        if let ActorKind::Coin(spring) = &mut self.kind {
            spring.advance(time);
        }
    }

    /// Spring displacement, zero for anything but a coin
    pub fn spring_vector(&self) -> Vector {
        match &self.kind {
            ActorKind::Coin(spring) => spring.offset(),
            _ => Vector::ZERO,
        }
    }

    pub(crate) fn act_coin(&mut self, time: f32) {
        self.update_spring(time);
        if let ActorKind::Coin(spring) = &self.kind {
            self.pos = spring.anchor.plus(spring.offset());
        }
    }
}
