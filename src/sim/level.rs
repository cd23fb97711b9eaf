//! Level state: the static obstacle grid, the live actors and the win/lose outcome
//!
//! The level never advances time on its own. A driver (see `tick`) moves the
//! actors, reports what the player touched and counts down `finish_delay`.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorType};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;
use crate::covered_cells;

/// Static obstacle occupying a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

/// Rows of cells, `grid[y][x]`. Rows may be shorter than the level width;
/// missing cells are empty.
pub type Grid = Vec<Vec<Option<Obstacle>>>;

/// Terminal outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    Won,
    Lost,
}

/// What the player ran into: an obstacle or another actor's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Wall,
    Lava,
    Actor,
    Player,
    Fireball,
    Coin,
}

impl From<Obstacle> for TouchKind {
    fn from(obstacle: Obstacle) -> Self {
        match obstacle {
            Obstacle::Wall => TouchKind::Wall,
            Obstacle::Lava => TouchKind::Lava,
        }
    }
}

impl From<ActorType> for TouchKind {
    fn from(actor_type: ActorType) -> Self {
        match actor_type {
            ActorType::Actor => TouchKind::Actor,
            ActorType::Player => TouchKind::Player,
            ActorType::Fireball => TouchKind::Fireball,
            ActorType::Coin => TouchKind::Coin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    grid: Grid,
    /// Live actors in insertion order
    pub(crate) actors: Vec<Actor>,
    /// Last player-tagged actor at construction time
    player: Option<ActorId>,
    height: usize,
    width: usize,
    status: Option<LevelStatus>,
    /// Counted down by the driver once `status` is set
    pub finish_delay: f32,
    /// Next actor id to hand out
    next_id: u32,
}

impl Level {
    /// Build a level owning `actors`. Actors are numbered 1, 2, ... in
    /// insertion order, replacing any id they carried before.
    pub fn new(grid: Grid, mut actors: Vec<Actor>) -> Self {
        for (index, actor) in actors.iter_mut().enumerate() {
            actor.id = ActorId(index as u32 + 1);
        }
        let next_id = actors.len() as u32 + 1;
        let player = actors
            .iter()
            .rev()
            .find(|actor| actor.actor_type() == ActorType::Player)
            .map(|actor| actor.id);
        let height = grid.len();
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);

        Self {
            grid,
            actors,
            player,
            height,
            width,
            status: None,
            finish_delay: FINISH_DELAY,
            next_id,
        }
    }

    /// Allocate a new actor id
    fn next_actor_id(&mut self) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add `actor` after the existing ones under a fresh id
    pub fn spawn(&mut self, mut actor: Actor) -> ActorId {
        actor.id = self.next_actor_id();
        let id = actor.id;
        self.actors.push(actor);
        id
    }

    /// Override the end-of-level delay
    pub fn with_finish_delay(mut self, finish_delay: f32) -> Self {
        self.finish_delay = finish_delay;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn status(&self) -> Option<LevelStatus> {
        self.status
    }

    pub fn player_id(&self) -> Option<ActorId> {
        self.player
    }

    /// The player, if it is still among the actors
    pub fn player(&self) -> Option<&Actor> {
        let id = self.player?;
        self.actors.iter().find(|actor| actor.id == id)
    }

    /// Outcome decided and the end-of-level delay has run out
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First actor, in insertion order, overlapping `actor`
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|other| actor.is_intersect(other))
    }

    /// Obstacle touched by a box at `pos` with `size`.
    ///
    /// Below the level is lava; past the top or the sides is wall. Inside,
    /// the first occupied cell in row-major order wins.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let far = pos.plus(size);

        if far.y > self.height as f32 {
            return Some(Obstacle::Lava);
        }
        if pos.y < 0.0 || pos.x < 0.0 || far.x > self.width as f32 {
            return Some(Obstacle::Wall);
        }

        let (start, end) = covered_cells(pos.into(), far.into());
        for y in start.y as usize..end.y as usize {
            let Some(row) = self.grid.get(y) else {
                continue;
            };
            for x in start.x as usize..end.x as usize {
                if let Some(Some(obstacle)) = row.get(x) {
                    return Some(*obstacle);
                }
            }
        }

        None
    }

    /// Remove the actor with `id`, returning it if it was present
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|actor| actor.id == id)?;
        Some(self.actors.remove(index))
    }

    /// No live actor carries the `actor_type` tag
    pub fn no_more_actors(&self, actor_type: ActorType) -> bool {
        !self
            .actors
            .iter()
            .any(|actor| actor.actor_type() == actor_type)
    }

    /// Apply the game rules for the player touching `kind`.
    ///
    /// Lava and fireballs lose the level; collecting the last coin wins it.
    /// Once an outcome is set, further touches are ignored.
    pub fn player_touched(&mut self, kind: impl Into<TouchKind>, actor: Option<ActorId>) {
        if self.status.is_some() {
            return;
        }

        match kind.into() {
            TouchKind::Lava | TouchKind::Fireball => {
                log::info!("Level lost");
                self.status = Some(LevelStatus::Lost);
            }
            TouchKind::Coin => {
                if let Some(coin) = actor.and_then(|id| self.remove_actor(id)) {
                    log::debug!("Coin {:?} collected", coin.id);
                }
                if self.no_more_actors(ActorType::Coin) {
                    log::info!("Level won");
                    self.status = Some(LevelStatus::Won);
                }
            }
            TouchKind::Wall | TouchKind::Actor | TouchKind::Player => {}
        }
    }
}
