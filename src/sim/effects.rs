//! Time-bounded decorative effects
//!
//! The supernova flash expands and fades until it terminates itself; the
//! game-over overlay exposes a clamped progress value derived from elapsed
//! simulated time.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Expanding supernova flash. At most one instance is tracked; a new trigger
/// replaces any live one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Supernova {
    pub active: bool,
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub alpha: f32,
}

impl Supernova {
    /// Start a fresh flash, discarding any live one. A missing max radius is
    /// rolled from the configured range; a missing alpha uses the default.
    pub fn trigger(
        &mut self,
        pos: Vec2,
        max_radius: Option<f32>,
        alpha: Option<f32>,
        rng: &mut Pcg32,
    ) {
        *self = Self {
            active: true,
            pos,
            radius: SUPERNOVA_START_RADIUS,
            max_radius: max_radius
                .unwrap_or_else(|| rng.random_range(SUPERNOVA_MAX_RADIUS_MIN..SUPERNOVA_MAX_RADIUS_MAX)),
            alpha: alpha.unwrap_or(SUPERNOVA_DEFAULT_ALPHA),
        };
    }

    /// Expand and fade one step; self-deactivates when fully faded or grown
    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        self.radius += SUPERNOVA_RADIUS_STEP;
        self.alpha -= SUPERNOVA_ALPHA_STEP;
        if self.alpha <= 0.0 || self.radius >= self.max_radius {
            self.active = false;
        }
    }
}

/// Game-over overlay timing; `progress` drives the renderer's fade-in
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameOverAnimation {
    pub active: bool,
    start_ms: f32,
}

impl GameOverAnimation {
    pub fn start(&mut self, now_ms: f32) {
        self.active = true;
        self.start_ms = now_ms;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Elapsed fraction of the overlay animation, clamped to [0, 1]
    pub fn progress(&self, now_ms: f32) -> f32 {
        if !self.active {
            return 0.0;
        }
        ((now_ms - self.start_ms) / GAME_OVER_ANIMATION_MS).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_trigger_uses_defaults() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut nova = Supernova::default();
        nova.trigger(Vec2::new(100.0, 50.0), None, None, &mut rng);
        assert!(nova.active);
        assert_eq!(nova.radius, SUPERNOVA_START_RADIUS);
        assert_eq!(nova.alpha, SUPERNOVA_DEFAULT_ALPHA);
        assert!(nova.max_radius >= SUPERNOVA_MAX_RADIUS_MIN);
        assert!(nova.max_radius < SUPERNOVA_MAX_RADIUS_MAX);
    }

    #[test]
    fn test_new_trigger_replaces_live_effect() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut nova = Supernova::default();
        nova.trigger(Vec2::new(10.0, 10.0), Some(400.0), Some(0.5), &mut rng);
        for _ in 0..20 {
            nova.update();
        }
        nova.trigger(Vec2::new(99.0, 99.0), Some(200.0), Some(0.9), &mut rng);
        assert_eq!(nova.pos, Vec2::new(99.0, 99.0));
        assert_eq!(nova.radius, SUPERNOVA_START_RADIUS);
        assert_eq!(nova.alpha, 0.9);
        assert_eq!(nova.max_radius, 200.0);
    }

    #[test]
    fn test_deactivates_on_alpha_fade() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut nova = Supernova::default();
        nova.trigger(Vec2::ZERO, Some(10_000.0), Some(0.025), &mut rng);
        for _ in 0..2 {
            nova.update();
        }
        assert!(nova.active);
        nova.update();
        assert!(!nova.active);
    }

    #[test]
    fn test_deactivates_on_max_radius() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut nova = Supernova::default();
        nova.trigger(Vec2::ZERO, Some(20.0), Some(0.8), &mut rng);
        for _ in 0..4 {
            nova.update();
        }
        assert!(nova.active);
        nova.update(); // radius hits 20
        assert!(!nova.active);
    }

    #[test]
    fn test_game_over_progress_clamps() {
        let mut anim = GameOverAnimation::default();
        assert_eq!(anim.progress(5000.0), 0.0);

        anim.start(1000.0);
        assert_eq!(anim.progress(1000.0), 0.0);
        let halfway = anim.progress(1000.0 + GAME_OVER_ANIMATION_MS / 2.0);
        assert!((halfway - 0.5).abs() < 1e-5);
        assert_eq!(anim.progress(1000.0 + GAME_OVER_ANIMATION_MS * 2.0), 1.0);

        anim.clear();
        assert!(!anim.active);
        assert_eq!(anim.progress(9999.0), 0.0);
    }
}
