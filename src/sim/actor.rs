//! Actors: axis-aligned boxes that move and collide on the level grid
//!
//! One `Actor` struct carries the shared geometry; `ActorKind` holds the
//! per-variant state and selects the motion rule in `act`.

use serde::{Deserialize, Serialize};

use super::coin::Spring;
use super::fireball::FireballKind;
use super::level::Level;
use super::vector::Vector;
use crate::consts::*;
use crate::error::SimError;
use crate::vector;

/// Identity of one logical actor within a level. Clones of an actor keep its id.
///
/// Ids are handed out by the owning `Level`; an actor built on its own
/// carries `ActorId::UNASSIGNED` until it is placed in one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    pub const UNASSIGNED: Self = Self(0);

    #[inline]
    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

/// Type tag used by game rules and parser filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Actor,
    Player,
    Fireball,
    Coin,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Actor => "actor",
            ActorType::Player => "player",
            ActorType::Fireball => "fireball",
            ActorType::Coin => "coin",
        }
    }
}

/// Variant state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Plain actor with no motion of its own
    Base,
    /// Moved by the input driver, never by `act`
    Player,
    Fireball(FireballKind),
    Coin(Spring),
}

/// A moving box on the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub pos: Vector,
    pub size: Vector,
    pub speed: Vector,
    pub kind: ActorKind,
}

impl Default for Actor {
    fn default() -> Self {
        Self::with_kind(Vector::ZERO, Vector::ONE, Vector::ZERO, ActorKind::Base)
    }
}

impl Actor {
    /// Plain actor, validating the geometry it is given
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self, SimError> {
        let pos = pos.validated("actor position")?;
        let size = size.validated("actor size")?;
        let speed = speed.validated("actor speed")?;
        if size.x < 0.0 || size.y < 0.0 {
            return Err(SimError::NegativeSize(size));
        }
        Ok(Self::with_kind(pos, size, speed, ActorKind::Base))
    }

    pub(crate) fn with_kind(pos: Vector, size: Vector, speed: Vector, kind: ActorKind) -> Self {
        Self {
            id: ActorId::UNASSIGNED,
            pos,
            size,
            speed,
            kind,
        }
    }

    /// Player spawned on the cell at `pos`
    pub fn player(pos: Vector) -> Self {
        Self::with_kind(
            pos.plus(vector(PLAYER_OFFSET)),
            vector(PLAYER_SIZE),
            Vector::ZERO,
            ActorKind::Player,
        )
    }

    pub fn actor_type(&self) -> ActorType {
        match self.kind {
            ActorKind::Base => ActorType::Actor,
            ActorKind::Player => ActorType::Player,
            ActorKind::Fireball(_) => ActorType::Fireball,
            ActorKind::Coin(_) => ActorType::Coin,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Whether two boxes overlap.
    ///
    /// Edges are half-open: boxes that only touch along a side do not
    /// intersect, and an actor never intersects itself. Actors placed in a
    /// level are the same actor when their ids match.
    pub fn is_intersect(&self, other: &Actor) -> bool {
        if std::ptr::eq(self, other) || (self.id.is_assigned() && self.id == other.id) {
            return false;
        }

        let apart_x = self.right() <= other.left() || self.left() >= other.right();
        let apart_y = self.bottom() <= other.top() || self.top() >= other.bottom();
        !(apart_x || apart_y)
    }

    /// Advance this actor by `time` using its variant's motion rule
    pub fn act(&mut self, time: f32, level: &Level) {
        match self.kind {
            ActorKind::Base | ActorKind::Player => {}
            ActorKind::Fireball(_) => self.act_fireball(time, level),
            ActorKind::Coin(_) => self.act_coin(time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Actor {
        Actor::new(Vector::new(x, y), Vector::new(w, h), Vector::ZERO).unwrap()
    }

    #[test]
    fn test_default_geometry() {
        let actor = Actor::default();
        assert_eq!(actor.pos, Vector::ZERO);
        assert_eq!(actor.size, Vector::ONE);
        assert_eq!(actor.speed, Vector::ZERO);
        assert_eq!(actor.actor_type(), ActorType::Actor);
        assert_eq!(actor.actor_type().as_str(), "actor");
        assert_eq!(ActorType::Player.as_str(), "player");
        assert_eq!(ActorType::Fireball.as_str(), "fireball");
        assert_eq!(ActorType::Coin.as_str(), "coin");
    }

    #[test]
    fn test_bounds() {
        let actor = boxed(1.0, 2.0, 3.0, 4.0);
        assert_eq!(actor.left(), 1.0);
        assert_eq!(actor.top(), 2.0);
        assert_eq!(actor.right(), 4.0);
        assert_eq!(actor.bottom(), 6.0);
    }

    #[test]
    fn test_new_rejects_bad_geometry() {
        assert!(matches!(
            Actor::new(Vector::ZERO, Vector::new(-1.0, 1.0), Vector::ZERO),
            Err(SimError::NegativeSize(_))
        ));
        assert!(matches!(
            Actor::new(Vector::new(f32::NAN, 0.0), Vector::ONE, Vector::ZERO),
            Err(SimError::NonFinite { what: "actor position", .. })
        ));
    }

    #[test]
    fn test_standalone_actors_are_unassigned() {
        let a = Actor::default();
        assert_eq!(a.id, ActorId::UNASSIGNED);
        assert!(!a.id.is_assigned());
        assert_eq!(Actor::player(Vector::ZERO).id, ActorId::UNASSIGNED);
    }

    #[test]
    fn test_unassigned_twins_still_collide() {
        let a = boxed(0.0, 0.0, 1.0, 1.0);
        let b = boxed(0.5, 0.5, 1.0, 1.0);
        assert_eq!(a.id, b.id);
        assert!(a.is_intersect(&b));
        assert!(a.is_intersect(&a.clone()));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = boxed(0.0, 0.0, 1.0, 1.0);
        let b = boxed(1.0, 0.0, 1.0, 1.0);
        let c = boxed(0.0, 1.0, 1.0, 1.0);
        assert!(!a.is_intersect(&b));
        assert!(!a.is_intersect(&c));
    }

    #[test]
    fn test_overlap_intersects() {
        let a = boxed(0.0, 0.0, 1.0, 1.0);
        let b = boxed(0.5, 0.0, 1.0, 1.0);
        let inner = boxed(0.25, 0.25, 0.5, 0.5);
        assert!(a.is_intersect(&b));
        assert!(a.is_intersect(&inner));
        assert!(inner.is_intersect(&a));
    }

    #[test]
    fn test_clone_of_placed_actor_counts_as_same_actor() {
        let level = Level::new(vec![vec![None; 3]; 3], vec![boxed(0.0, 0.0, 1.0, 1.0)]);
        let placed = &level.actors()[0];
        assert!(placed.id.is_assigned());
        assert!(!placed.is_intersect(placed));
        assert!(!placed.is_intersect(&placed.clone()));
    }

    #[test]
    fn test_player_spawn_offset() {
        let player = Actor::player(Vector::new(3.0, 4.0));
        assert_eq!(player.pos, Vector::new(3.0, 3.5));
        assert_eq!(player.size, Vector::new(0.8, 1.5));
        assert_eq!(player.speed, Vector::ZERO);
        assert_eq!(player.actor_type(), ActorType::Player);
    }

    #[test]
    fn test_act_is_noop_for_base_and_player() {
        let level = Level::new(vec![vec![None; 5]; 5], Vec::new());
        let mut actor = boxed(1.0, 1.0, 1.0, 1.0);
        actor.speed = Vector::new(1.0, 1.0);
        let before = actor.clone();
        actor.act(1.0, &level);
        assert_eq!(actor, before);

        let mut player = Actor::player(Vector::new(2.0, 2.0));
        let before = player.clone();
        player.act(1.0, &level);
        assert_eq!(player, before);
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric_and_irreflexive(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0,
            w in 0.0f32..5.0, h in 0.0f32..5.0,
        ) {
            let a = boxed(ax, ay, w, h);
            let b = boxed(bx, by, h, w);
            prop_assert!(!a.is_intersect(&a));
            prop_assert_eq!(a.is_intersect(&b), b.is_intersect(&a));
        }
    }
}
