//! Exhaust particles anchored to the player
//!
//! One particle is spawned per tick while a round is running and the
//! population is under the cap; every live particle ages on every tick
//! regardless of phase.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Player;
use crate::consts::*;

/// Size of the ember color palette the renderer maps `color` into
pub const PARTICLE_PALETTE_LEN: u8 = 5;

/// A transient visual particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Index into the ember palette
    pub color: u8,
    /// Remaining ticks; the particle is removed when this reaches zero
    pub lifetime: u32,
    pub max_lifetime: u32,
    /// lifetime / max_lifetime, recomputed each tick for the fade-out
    pub alpha: f32,
}

/// Spawn a particle at the player's lower-center, with randomized size,
/// speed, lifetime, and a small symmetric horizontal drift
pub fn spawn(player: &Player, rng: &mut Pcg32) -> Particle {
    let size = rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
    let speed = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
    let lifetime = rng.random_range(PARTICLE_LIFETIME_MIN..PARTICLE_LIFETIME_MAX);
    let color = rng.random_range(0..PARTICLE_PALETTE_LEN);
    let vx = rng.random_range(-1.0..1.0);

    Particle {
        pos: player.particle_anchor(),
        // Downward bias: vertical speed follows the rolled speed
        vel: Vec2::new(vx, speed * 0.8),
        size,
        color,
        lifetime,
        max_lifetime: lifetime,
        alpha: 1.0,
    }
}

/// Advance every particle and drop the expired ones. Iterates back-to-front
/// so removal never disturbs the update order of the survivors.
pub fn update(particles: &mut Vec<Particle>) {
    for i in (0..particles.len()).rev() {
        let p = &mut particles[i];
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.lifetime = p.lifetime.saturating_sub(1);
        p.alpha = p.lifetime as f32 / p.max_lifetime as f32;
        if p.lifetime == 0 {
            particles.remove(i);
        }
    }
}
