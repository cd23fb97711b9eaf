//! Simulation step
//!
//! Reference driver loop: moves every actor, then applies the game rules to
//! whatever the player is touching. Player movement itself comes from the
//! embedding input layer and is not handled here.

use super::level::Level;

/// Advance the level by one step of `dt`
pub fn tick(level: &mut Level, dt: f32) {
    if level.status().is_some() {
        level.finish_delay -= dt;
    }

    // Insertion order; each actor sees the ones before it already moved
    for index in 0..level.actors.len() {
        let mut actor = level.actors[index].clone();
        actor.act(dt, level);
        level.actors[index] = actor;
    }

    touch_player(level);
}

/// Advance the level by `elapsed`, split into steps no longer than `max_step`.
///
/// Stops early once the level is finished. A non-finite `elapsed` takes no
/// steps. Returns the number of steps taken.
pub fn advance(level: &mut Level, elapsed: f32, max_step: f32) -> u32 {
    if !elapsed.is_finite() {
        log::warn!("Ignoring non-finite elapsed time {}", elapsed);
        return 0;
    }
    let max_step = if max_step > 0.0 { max_step } else { elapsed };
    let mut remaining = elapsed;
    let mut steps = 0;

    while remaining > 0.0 && !level.is_finished() {
        let dt = remaining.min(max_step);
        tick(level, dt);
        remaining -= dt;
        steps += 1;
    }

    steps
}

fn touch_player(level: &mut Level) {
    let Some(player) = level.player().cloned() else {
        return;
    };

    if let Some(obstacle) = level.obstacle_at(player.pos, player.size) {
        level.player_touched(obstacle, None);
    }

    let hit = level
        .actor_at(&player)
        .map(|other| (other.actor_type(), other.id));
    if let Some((actor_type, id)) = hit {
        level.player_touched(actor_type, Some(id));
    }
}
