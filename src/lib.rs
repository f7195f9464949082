//! Headball - a single-screen arcade bounce game with a simulated
//! livestream framing
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, particles, effects)
//! - `events`: Typed outbound signals the simulation emits each tick
//! - `dispatch`: Fan-out of those signals to audio/chat/recording collaborators
//! - `highscores`: Persisted best score
//! - `settings`: Player preferences

pub mod dispatch;
pub mod events;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use events::GameEvent;
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate; one simulation tick per rendered frame
    pub const TICK_HZ: f32 = 60.0;
    /// Simulated wall-clock milliseconds per tick
    pub const TICK_MS: f32 = 1000.0 / TICK_HZ;

    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 640.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;
    pub const GROUND_HEIGHT: f32 = 24.0;
    /// Y coordinate of the ground line
    pub const GROUND_Y: f32 = CANVAS_HEIGHT - GROUND_HEIGHT;

    /// Physics
    pub const GRAVITY: f32 = 0.15;
    /// Damping applied to velocity on wall and ground impacts
    pub const BOUNCE_FACTOR: f32 = 0.8;
    /// Vertical speed multiplier on each successful head bounce (>1, uncapped)
    pub const BOUNCE_POWER_INCREASE: f32 = 1.02;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Maximum hover displacement in pixels
    pub const HOVER_HEIGHT: f32 = 10.0;
    /// Hover phase advance per simulated millisecond
    pub const HOVER_SPEED: f32 = 0.003;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 18.0;
    pub const BALL_VELOCITY_X: f32 = 1.5;
    pub const BALL_VELOCITY_Y: f32 = -8.0;

    /// Particles
    pub const PARTICLE_COUNT: usize = 100;
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_MAX: f32 = 5.0;
    pub const PARTICLE_SPEED_MIN: f32 = 1.0;
    pub const PARTICLE_SPEED_MAX: f32 = 3.0;
    pub const PARTICLE_LIFETIME_MIN: u32 = 15;
    pub const PARTICLE_LIFETIME_MAX: u32 = 30;
    /// Downward acceleration applied to each particle per tick
    pub const PARTICLE_GRAVITY: f32 = 0.05;

    /// Supernova effect
    pub const SUPERNOVA_START_RADIUS: f32 = 10.0;
    pub const SUPERNOVA_RADIUS_STEP: f32 = 2.0;
    pub const SUPERNOVA_ALPHA_STEP: f32 = 0.01;
    pub const SUPERNOVA_DEFAULT_ALPHA: f32 = 0.8;
    /// Range for the randomized default maximum radius
    pub const SUPERNOVA_MAX_RADIUS_MIN: f32 = 300.0;
    pub const SUPERNOVA_MAX_RADIUS_MAX: f32 = 500.0;

    /// Score milestones
    pub const CHAT_MILESTONE_INTERVAL: u32 = 5;
    pub const SUPERNOVA_MILESTONE_INTERVAL: u32 = 10;

    /// Game over overlay animation duration (ms)
    pub const GAME_OVER_ANIMATION_MS: f32 = 3000.0;
}
