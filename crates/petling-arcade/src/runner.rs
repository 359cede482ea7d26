//! Side-scrolling obstacle jump.
//!
//! The player sits at a fixed x and jumps over ground obstacles scrolling
//! in from the right. Gravity integration is `vel += g*dt; y += vel*dt`
//! with a hard clamp to the ground. Spawning accelerates and obstacles
//! speed up as the score grows.
//!
//! Tick order: input → integrate → ground clamp → spawn → advance & count
//! passes → collision → cull off-screen.

use serde::{Deserialize, Serialize};

use crate::collision::aabb_overlap;

/// Tuning for the runner. Distances in pixels, times in seconds; y is
/// height above the ground (positive up).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Gravity, negative (pulls the player back down).
    pub gravity: f32,
    /// Upward velocity granted by a jump from the ground.
    pub jump_velocity: f32,
    /// The player's fixed horizontal position (left edge).
    pub player_x: f32,
    pub player_w: f32,
    pub player_h: f32,
    pub obstacle_w: f32,
    pub obstacle_h: f32,
    /// Where new obstacles appear (just off the right edge).
    pub spawn_x: f32,
    /// Leftward obstacle speed at score 0.
    pub base_speed: f32,
    /// Extra speed per score point.
    pub speed_per_point: f32,
    /// Seconds between spawns at score 0.
    pub base_spawn_interval: f32,
    /// Score at which the spawn rate has doubled:
    /// `interval = base / (1 + score / spawn_rate_scale)`.
    pub spawn_rate_scale: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            gravity: -1800.0,
            jump_velocity: 700.0,
            player_x: 80.0,
            player_w: 44.0,
            player_h: 48.0,
            obstacle_w: 28.0,
            obstacle_h: 48.0,
            spawn_x: 820.0,
            base_speed: 240.0,
            speed_per_point: 1.2,
            base_spawn_interval: 1.6,
            spawn_rate_scale: 100.0,
        }
    }
}

/// One ground obstacle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge.
    pub x: f32,
    /// Set once when the trailing edge crosses the player's x, so each
    /// obstacle scores exactly one point.
    pub passed: bool,
}

/// Per-tick input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerInput {
    pub jump: bool,
}

/// Full simulation state. Serializable so a session can be suspended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerState {
    /// Height of the player's bottom edge above the ground.
    pub y: f32,
    pub vel_y: f32,
    pub jumping: bool,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Seconds since the last spawn.
    pub spawn_timer: f32,
    /// Terminal: set on obstacle collision, never cleared.
    pub game_over: bool,
}

impl RunnerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obstacle scroll speed at the current score.
    pub fn obstacle_speed(&self, config: &RunnerConfig) -> f32 {
        config.base_speed + self.score as f32 * config.speed_per_point
    }

    /// Spawn interval at the current score (shrinks as the score grows).
    pub fn spawn_interval(&self, config: &RunnerConfig) -> f32 {
        config.base_spawn_interval / (1.0 + self.score as f32 / config.spawn_rate_scale)
    }
}

/// Advance the runner by `dt` seconds.
pub fn tick(state: &mut RunnerState, input: &RunnerInput, config: &RunnerConfig, dt: f32) {
    if state.game_over {
        return;
    }

    if input.jump && !state.jumping {
        state.vel_y = config.jump_velocity;
        state.jumping = true;
    }

    state.vel_y += config.gravity * dt;
    state.y += state.vel_y * dt;
    if state.y <= 0.0 {
        state.y = 0.0;
        state.vel_y = 0.0;
        state.jumping = false;
    }

    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval(config) {
        state.obstacles.push(Obstacle {
            x: config.spawn_x,
            passed: false,
        });
        state.spawn_timer = 0.0;
    }

    // Speed is sampled once per tick; scoring mid-tick affects the next tick.
    let speed = state.obstacle_speed(config);
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed * dt;
        if !obstacle.passed && obstacle.x + config.obstacle_w < config.player_x {
            obstacle.passed = true;
            state.score += 1;
        }
    }

    let hit = state.obstacles.iter().any(|o| {
        aabb_overlap(
            config.player_x,
            state.y,
            config.player_w,
            config.player_h,
            o.x,
            0.0,
            config.obstacle_w,
            config.obstacle_h,
        )
    });
    if hit {
        state.game_over = true;
        return;
    }

    state.obstacles.retain(|o| o.x + config.obstacle_w > 0.0);
}
