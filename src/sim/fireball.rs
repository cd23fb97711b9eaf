//! Fireballs: hazards that travel in a straight line and bounce or reset on obstacles

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::level::Level;
use super::vector::Vector;
use crate::consts::*;
use crate::vector;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireballKind {
    /// Free-moving fireball with caller-supplied speed
    Plain,
    /// Patrols left and right
    Horizontal,
    /// Patrols up and down
    Vertical,
    /// Falls, then restarts from where it spawned
    Rain { initial_pos: Vector },
}

impl Actor {
    /// Fireball at `pos` moving with `speed`
    pub fn fireball(pos: Vector, speed: Vector) -> Self {
        Self::with_kind(
            pos,
            vector(FIREBALL_SIZE),
            speed,
            ActorKind::Fireball(FireballKind::Plain),
        )
    }

    pub fn horizontal_fireball(pos: Vector) -> Self {
        Self::with_kind(
            pos,
            vector(FIREBALL_SIZE),
            vector(HORIZONTAL_FIREBALL_SPEED),
            ActorKind::Fireball(FireballKind::Horizontal),
        )
    }

    pub fn vertical_fireball(pos: Vector) -> Self {
        Self::with_kind(
            pos,
            vector(FIREBALL_SIZE),
            vector(VERTICAL_FIREBALL_SPEED),
            ActorKind::Fireball(FireballKind::Vertical),
        )
    }

    /// Falling fireball; remembers `pos` for its resets
    pub fn fire_rain(pos: Vector) -> Self {
        Self::with_kind(
            pos,
            vector(FIREBALL_SIZE),
            vector(FIRE_RAIN_SPEED),
            ActorKind::Fireball(FireballKind::Rain { initial_pos: pos }),
        )
    }

    /// Where the actor would be after `time` at its current speed
    #[inline]
    pub fn next_position(&self, time: f32) -> Vector {
        self.pos.plus(self.speed.times(time))
    }

    /// React to running into an obstacle: fire rain resets, anything else bounces
    pub fn handle_obstacle(&mut self) {
        match self.kind {
            ActorKind::Fireball(FireballKind::Rain { initial_pos }) => {
                log::debug!("fire rain {:?} reset to {:?}", self.id, initial_pos);
                self.pos = initial_pos;
            }
            _ => {
                self.speed = self.speed.times(-1.0);
                log::debug!("fireball {:?} bounced, speed now {:?}", self.id, self.speed);
            }
        }
    }

    pub(crate) fn act_fireball(&mut self, time: f32, level: &Level) {
        let next = self.next_position(time);
        if level.obstacle_at(next, self.size).is_none() {
            self.pos = next;
        } else {
            self.handle_obstacle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActorType, Obstacle};

    /// 5x5 open room with a wall at (3, 1)
    fn room() -> Level {
        let mut grid = vec![vec![None; 5]; 5];
        grid[1][3] = Some(Obstacle::Wall);
        Level::new(grid, Vec::new())
    }

    #[test]
    fn test_variant_speeds() {
        let pos = Vector::new(1.0, 1.0);
        assert_eq!(Actor::horizontal_fireball(pos).speed, Vector::new(2.0, 0.0));
        assert_eq!(Actor::vertical_fireball(pos).speed, Vector::new(0.0, 2.0));
        assert_eq!(Actor::fire_rain(pos).speed, Vector::new(0.0, 3.0));
        for fireball in [
            Actor::fireball(pos, Vector::ZERO),
            Actor::horizontal_fireball(pos),
            Actor::vertical_fireball(pos),
            Actor::fire_rain(pos),
        ] {
            assert_eq!(fireball.actor_type(), ActorType::Fireball);
            assert_eq!(fireball.size, Vector::ONE);
            assert_eq!(fireball.pos, pos);
        }
    }

    #[test]
    fn test_next_position() {
        let fireball = Actor::fireball(Vector::new(5.0, 5.0), Vector::new(2.0, 3.0));
        assert_eq!(fireball.next_position(2.0), Vector::new(9.0, 11.0));
        assert_eq!(fireball.next_position(0.0), Vector::new(5.0, 5.0));
    }

    #[test]
    fn test_handle_obstacle_reverses_speed() {
        let mut fireball = Actor::fireball(Vector::ZERO, Vector::new(2.0, -3.0));
        fireball.handle_obstacle();
        assert_eq!(fireball.speed, Vector::new(-2.0, 3.0));
    }

    #[test]
    fn test_act_moves_through_free_space() {
        let level = room();
        let mut fireball = Actor::horizontal_fireball(Vector::new(0.0, 3.0));
        fireball.act(0.5, &level);
        assert_eq!(fireball.pos, Vector::new(1.0, 3.0));
        assert_eq!(fireball.speed, Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_act_bounces_off_wall() {
        let level = room();
        let mut fireball = Actor::horizontal_fireball(Vector::new(2.0, 1.0));
        fireball.act(0.5, &level);
        assert_eq!(fireball.pos, Vector::new(2.0, 1.0));
        assert_eq!(fireball.speed, Vector::new(-2.0, 0.0));
    }

    #[test]
    fn test_act_bounces_off_level_edge() {
        let level = room();
        let mut fireball = Actor::vertical_fireball(Vector::new(0.0, 0.0));
        fireball.speed = Vector::new(0.0, -2.0);
        fireball.act(0.1, &level);
        assert_eq!(fireball.pos, Vector::ZERO);
        assert_eq!(fireball.speed, Vector::new(0.0, 2.0));
    }

    #[test]
    fn test_fire_rain_resets_to_spawn() {
        let level = room();
        let spawn = Vector::new(1.0, 0.0);
        let mut rain = Actor::fire_rain(spawn);

        rain.act(1.0, &level);
        assert_eq!(rain.pos, Vector::new(1.0, 3.0));

        // Next step would leave the bottom of the level: lava
        rain.act(1.0, &level);
        assert_eq!(rain.pos, spawn);
        assert_eq!(rain.speed, Vector::new(0.0, 3.0));
    }
}
