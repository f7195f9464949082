//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no dt scaling
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies; side effects leave the
//!   core as `GameEvent` values

pub mod collision;
pub mod effects;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::WallHit;
pub use effects::{GameOverAnimation, Supernova};
pub use particles::Particle;
pub use state::{Ball, GamePhase, GameWorld, Player};
pub use tick::{TickInput, tick};
