//! Per-frame simulation tick
//!
//! One tick corresponds to one rendered frame. Within a tick the order is
//! fixed: player movement, then ball integration, then collision resolution,
//! then particle and effect updates. Collision checks read the ball position
//! already advanced for this tick.

use glam::Vec2;

use super::collision::{self, WallHit};
use super::particles;
use super::state::{GamePhase, GameWorld};
use crate::consts::*;
use crate::events::GameEvent;

/// Input intent for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Start a round from idle, or restart after game over
    pub start: bool,
}

/// Advance the world by one tick
pub fn tick(world: &mut GameWorld, input: &TickInput) {
    world.time_ticks += 1;

    if input.start && world.phase != GamePhase::Running {
        start_round(world);
    }

    // Raw flag semantics: both held at once cancel out
    world.player.moving_left = input.move_left;
    world.player.moving_right = input.move_right;

    // Hover animates in every phase
    let now_ms = world.now_ms();
    world.player.hover_offset =
        (now_ms * world.player.hover_speed).sin() * world.player.hover_height;

    match world.phase {
        GamePhase::Running => {
            apply_movement(world);
            integrate_ball(world);
            resolve_collisions(world);
        }
        // Decorative drift: same integration, silent cosmetic bounces
        GamePhase::Idle | GamePhase::GameOver => drift_ball(world),
    }

    // New particles only while running; aging happens in every phase
    if world.phase == GamePhase::Running && world.particles.len() < PARTICLE_COUNT {
        let p = particles::spawn(&world.player, &mut world.rng);
        world.particles.push(p);
    }
    particles::update(&mut world.particles);
    world.supernova.update();
}

/// Reset round state and enter the running phase
fn start_round(world: &mut GameWorld) {
    world.reset_round();
    world.phase = GamePhase::Running;
    world.events.push(GameEvent::GameStart);

    // Welcome flash at the playfield center
    let center = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    fire_supernova(world, center, Some(500.0), Some(0.3));
}

fn apply_movement(world: &mut GameWorld) {
    let player = &mut world.player;
    if player.moving_left {
        player.pos.x -= player.speed;
    }
    if player.moving_right {
        player.pos.x += player.speed;
    }
    player.pos.x = player.pos.x.clamp(0.0, CANVAS_WIDTH - player.width);
}

fn integrate_ball(world: &mut GameWorld) {
    let ball = &mut world.ball;
    let prev_x = ball.pos.x;
    ball.vel.y += GRAVITY;
    ball.pos += ball.vel;
    // Rolling-style spin: rotation tracks horizontal travel over radius
    ball.rotation -= (ball.pos.x - prev_x) / ball.radius;
}

fn resolve_collisions(world: &mut GameWorld) {
    if collision::resolve_walls(&mut world.ball) != WallHit::None {
        world.events.push(GameEvent::WallBounce);
    }

    if collision::resolve_player(&mut world.ball, &world.player) {
        world.score += 1;
        world.events.push(GameEvent::PlayerBounce);
        world.events.push(GameEvent::ScoreChanged(world.score));

        if world.score % CHAT_MILESTONE_INTERVAL == 0 {
            world.events.push(GameEvent::ChatMilestone { score: world.score });
        }
        if world.score % SUPERNOVA_MILESTONE_INTERVAL == 0 {
            let pos = world.ball.pos;
            fire_supernova(world, pos, None, None);
        }
    }

    if collision::ground_contact(&world.ball) {
        end_round(world);
    }
}

/// Running -> GameOver transition; fires its side effects exactly once
fn end_round(world: &mut GameWorld) {
    world.phase = GamePhase::GameOver;
    world.game_over_anim.start(world.now_ms());

    let new_high_score = world.score > world.high_score;
    if new_high_score {
        world.high_score = world.score;
    }
    world.events.push(GameEvent::GameOver {
        score: world.score,
        high_score: world.high_score,
        new_high_score,
    });
    world.events.push(GameEvent::RecordingStop);

    // Dramatic full-screen flash
    let center = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    fire_supernova(world, center, Some(500.0), Some(0.9));
}

/// Passive ball motion while no round is active. Wall and ground bounces are
/// cosmetic: damped reflection, no score, no events.
fn drift_ball(world: &mut GameWorld) {
    integrate_ball(world);
    collision::resolve_walls(&mut world.ball);
    if collision::ground_contact(&world.ball) {
        collision::settle_on_ground(&mut world.ball);
    }
}

fn fire_supernova(world: &mut GameWorld, pos: Vec2, max_radius: Option<f32>, alpha: Option<f32>) {
    world
        .supernova
        .trigger(pos, max_radius, alpha, &mut world.rng);
    world.events.push(GameEvent::Supernova {
        pos: world.supernova.pos,
        max_radius: world.supernova.max_radius,
        alpha: world.supernova.alpha,
    });
}
