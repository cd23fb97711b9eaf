//! Lava Run entry point
//!
//! Headless demo: parses a built-in level and runs the simulation until the
//! level is decided. Rendering and input belong to the embedding frontend.

use lava_run::Settings;
use lava_run::sim::{LevelParser, advance};

const DEMO_LEVEL: [&str; 4] = [
    "x     v     x",
    "x           x",
    "x  o  @  =  x",
    "xxxxxxxxxxxxx",
];

/// Simulated seconds per frame (60 Hz)
const FRAME_TIME: f32 = 1.0 / 60.0;
/// Give up after this many frames
const MAX_FRAMES: u32 = 60 * 30;

fn main() {
    env_logger::init();
    log::info!("Lava Run (headless) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    let settings = Settings {
        seed,
        ..Settings::default()
    };
    log::info!("Simulation seeded with {}", seed);

    let parser = LevelParser::standard().with_settings(settings.clone());
    let mut level = parser.parse(&DEMO_LEVEL);

    let mut frames = 0;
    while !level.is_finished() && frames < MAX_FRAMES {
        advance(&mut level, FRAME_TIME, settings.max_step);
        frames += 1;
    }

    match level.status() {
        Some(status) => println!("Level {:?} after {} frames", status, frames),
        None => println!("Level undecided after {} frames", frames),
    }
}
