//! Game state and core simulation types
//!
//! Everything the simulation loop owns lives on `GameWorld`; no module-level
//! mutable state anywhere.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::effects::{GameOverAnimation, Supernova};
use super::particles::Particle;
use crate::consts::*;
use crate::events::GameEvent;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// No round active; the ball drifts decoratively
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Round ended, overlay animating, waiting for restart
    GameOver,
}

/// The player-controlled character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner of the sprite box
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed in pixels per tick
    pub speed: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    /// Current sinusoidal hover displacement, recomputed every tick
    pub hover_offset: f32,
    pub hover_height: f32,
    pub hover_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                CANVAS_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                GROUND_Y - PLAYER_HEIGHT,
            ),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            moving_left: false,
            moving_right: false,
            hover_offset: 0.0,
            hover_height: HOVER_HEIGHT,
            hover_speed: HOVER_SPEED,
        }
    }
}

impl Player {
    /// Center of the collision circle approximating the player.
    /// The hover offset is deliberately not applied here.
    pub fn body_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.width / 2.0, self.pos.y + self.height / 2.0)
    }

    /// Radius of the collision circle: half the smaller sprite dimension
    pub fn collision_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }

    /// Spawn anchor for exhaust particles: lower-center, hover applied
    pub fn particle_anchor(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.width / 2.0,
            self.pos.y + self.hover_offset + self.height,
        )
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Visual spin in radians, derived from horizontal travel
    pub rotation: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            radius: BALL_RADIUS,
            vel: Vec2::new(BALL_VELOCITY_X, BALL_VELOCITY_Y),
            rotation: 0.0,
        }
    }
}

/// Complete game state, owned by the simulation loop and passed by
/// reference to each subsystem
#[derive(Debug, Clone)]
pub struct GameWorld {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the core
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Non-decreasing within a round, reset to 0 on (re)start
    pub score: u32,
    /// Best score observed; loaded from persistence at init
    pub high_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub ball: Ball,
    pub particles: Vec<Particle>,
    pub supernova: Supernova,
    pub game_over_anim: GameOverAnimation,
    /// Signals for collaborators, drained by the caller after each tick
    pub events: Vec<GameEvent>,
}

impl GameWorld {
    /// Create a new world in the idle phase
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            high_score,
            time_ticks: 0,
            player: Player::default(),
            ball: Ball::default(),
            particles: Vec::new(),
            supernova: Supernova::default(),
            game_over_anim: GameOverAnimation::default(),
            events: Vec::new(),
        }
    }

    /// Simulated wall-clock in milliseconds, derived from the tick counter
    pub fn now_ms(&self) -> f32 {
        self.time_ticks as f32 * TICK_MS
    }

    /// Reset round state to initial values. The phase transition and its
    /// side-effect events are the tick's responsibility.
    pub(crate) fn reset_round(&mut self) {
        self.player = Player::default();
        self.ball = Ball::default();
        self.score = 0;
        self.particles.clear();
        self.supernova = Supernova::default();
        self.game_over_anim.clear();
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
