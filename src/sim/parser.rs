//! Text layout to `Level` conversion
//!
//! Each layout row is a string, each character one cell: `' '` empty,
//! `'x'` wall, `'!'` lava, anything else looked up in the symbol table.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::level::{Grid, Level, Obstacle};
use super::vector::Vector;
use crate::error::SimError;
use crate::settings::Settings;

/// Symbols with a fixed meaning that never spawn actors
pub const RESERVED_SYMBOLS: [char; 3] = [' ', 'x', '!'];

/// Actor constructor a symbol can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spawn {
    Actor,
    Player,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
    Coin,
}

impl Spawn {
    /// Build the actor for the cell at `pos`
    pub fn spawn(self, pos: Vector, rng: &mut Pcg32) -> Actor {
        match self {
            Spawn::Actor => Actor {
                pos,
                ..Actor::default()
            },
            Spawn::Player => Actor::player(pos),
            Spawn::HorizontalFireball => Actor::horizontal_fireball(pos),
            Spawn::VerticalFireball => Actor::vertical_fireball(pos),
            Spawn::FireRain => Actor::fire_rain(pos),
            Spawn::Coin => Actor::coin(pos, rng),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LevelParser {
    dict: HashMap<char, Spawn>,
    settings: Settings,
}

impl LevelParser {
    pub fn new(dict: HashMap<char, Spawn>) -> Self {
        Self {
            dict,
            settings: Settings::default(),
        }
    }

    /// Replace the settings used for seeding and finish delay
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// The classic symbol table: `@` player, `o` coin, `=` and `|` fireballs, `v` fire rain
    pub fn standard() -> Self {
        Self::new(HashMap::from([
            ('@', Spawn::Player),
            ('o', Spawn::Coin),
            ('=', Spawn::HorizontalFireball),
            ('|', Spawn::VerticalFireball),
            ('v', Spawn::FireRain),
        ]))
    }

    /// Load a symbol table such as `{"@": "player", "o": "coin"}`
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let dict: HashMap<char, Spawn> = serde_json::from_str(json)?;
        Ok(Self::new(dict))
    }

    pub fn dict(&self) -> &HashMap<char, Spawn> {
        &self.dict
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<Spawn> {
        if RESERVED_SYMBOLS.contains(&symbol) {
            return None;
        }
        self.dict.get(&symbol).copied()
    }

    /// Obstacle grid for `layout`; each row keeps its own length
    pub fn create_grid<S: AsRef<str>>(&self, layout: &[S]) -> Grid {
        layout
            .iter()
            .map(|row| row.as_ref().chars().map(Self::obstacle_from_symbol).collect())
            .collect()
    }

    /// Actors for every registered symbol in `layout`, in row-major order.
    ///
    /// Coin phases come from an RNG seeded by the parser settings, so the
    /// same layout always yields the same actors.
    pub fn create_actors<S: AsRef<str>>(&self, layout: &[S]) -> Vec<Actor> {
        let mut rng = Pcg32::seed_from_u64(self.settings.seed);
        let mut actors = Vec::new();

        for (y, row) in layout.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                if let Some(spawn) = self.actor_from_symbol(symbol) {
                    actors.push(spawn.spawn(Vector::new(x as f32, y as f32), &mut rng));
                }
            }
        }

        actors
    }

    pub fn parse<S: AsRef<str>>(&self, layout: &[S]) -> Level {
        let level = Level::new(self.create_grid(layout), self.create_actors(layout))
            .with_finish_delay(self.settings.finish_delay);
        log::info!(
            "Parsed level {}x{} with {} actors",
            level.width(),
            level.height(),
            level.actors().len()
        );
        level
    }
}
