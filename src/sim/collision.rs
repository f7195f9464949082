//! Collision detection and response
//!
//! Three checks per tick, resolved in a fixed order: walls, then the player,
//! then the ground. The order is load-bearing: each check reads the ball
//! position already advanced for this tick.

use glam::Vec2;

use super::state::{Ball, Player};
use crate::consts::*;

/// Which wall the ball reflected off, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    None,
    Left,
    Right,
}

/// Clamp the ball to the playfield and reflect off the side walls with
/// horizontal damping
pub fn resolve_walls(ball: &mut Ball) -> WallHit {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x * BOUNCE_FACTOR;
        WallHit::Left
    } else if ball.pos.x + ball.radius > CANVAS_WIDTH {
        ball.pos.x = CANVAS_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x * BOUNCE_FACTOR;
        WallHit::Right
    } else {
        WallHit::None
    }
}

/// Head bounce. Triggers only while the ball is descending, so a single pass
/// through the collision circle scores exactly once.
///
/// On a hit the velocity is redirected along the hit angle at 80% of the
/// current speed horizontally, and the vertical speed is amplified by
/// `BOUNCE_POWER_INCREASE`. Returns true when the bounce happened.
pub fn resolve_player(ball: &mut Ball, player: &Player) -> bool {
    let center = player.body_center();
    let delta = ball.pos - center;
    let distance = delta.length();

    if distance >= ball.radius + player.collision_radius() || ball.vel.y <= 0.0 {
        return false;
    }

    let hit_angle = delta.y.atan2(delta.x);
    let hit_power = ball.vel.length();
    ball.vel.x = hit_angle.cos() * hit_power * 0.8;
    ball.vel.y = -ball.vel.y.abs() * BOUNCE_POWER_INCREASE;
    true
}

/// True when the ball's lower edge has crossed the ground line
pub fn ground_contact(ball: &Ball) -> bool {
    ball.pos.y + ball.radius > GROUND_Y
}

/// Cosmetic settle bounce used while no round is active: reflect and damp
/// vertically, damp horizontally, no events
pub fn settle_on_ground(ball: &mut Ball) {
    ball.pos.y = GROUND_Y - ball.radius;
    ball.vel.y = -ball.vel.y * BOUNCE_FACTOR;
    ball.vel.x *= BOUNCE_FACTOR;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            ..Ball::default()
        }
    }

    #[test]
    fn test_left_wall_clamps_and_reflects() {
        let mut ball = ball_at(Vec2::new(10.0, 200.0), Vec2::new(-4.0, 1.0));
        assert_eq!(resolve_walls(&mut ball), WallHit::Left);
        assert_eq!(ball.pos.x, ball.radius);
        assert!((ball.vel.x - 4.0 * BOUNCE_FACTOR).abs() < 1e-5);
        assert_eq!(ball.vel.y, 1.0);
    }

    #[test]
    fn test_right_wall_clamps_and_reflects() {
        let mut ball = ball_at(Vec2::new(635.0, 200.0), Vec2::new(4.0, 1.0));
        assert_eq!(resolve_walls(&mut ball), WallHit::Right);
        assert_eq!(ball.pos.x, CANVAS_WIDTH - ball.radius);
        assert!((ball.vel.x + 4.0 * BOUNCE_FACTOR).abs() < 1e-5);
    }

    #[test]
    fn test_no_wall_hit_mid_field() {
        let mut ball = ball_at(Vec2::new(320.0, 200.0), Vec2::new(4.0, 1.0));
        assert_eq!(resolve_walls(&mut ball), WallHit::None);
        assert_eq!(ball.vel, Vec2::new(4.0, 1.0));
    }

    #[test]
    fn test_player_hit_requires_descending_ball() {
        let player = Player::default();
        let center = player.body_center();
        // Inside the collision circle but moving upward: no trigger. This is
        // the re-trigger guard right after a bounce.
        let mut ball = ball_at(center + Vec2::new(0.0, -30.0), Vec2::new(0.0, -5.0));
        assert!(!resolve_player(&mut ball, &player));
        assert_eq!(ball.vel, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_player_hit_redirects_and_amplifies() {
        let player = Player::default();
        let center = player.body_center();
        // Directly above the center, descending
        let mut ball = ball_at(center + Vec2::new(0.0, -30.0), Vec2::new(0.0, 5.0));
        assert!(resolve_player(&mut ball, &player));
        // Hit angle is straight up, so the horizontal component collapses
        assert!(ball.vel.x.abs() < 1e-4);
        assert!((ball.vel.y + 5.0 * BOUNCE_POWER_INCREASE).abs() < 1e-4);
    }

    #[test]
    fn test_player_miss_outside_circle() {
        let player = Player::default();
        let center = player.body_center();
        let mut ball = ball_at(center + Vec2::new(0.0, -50.0), Vec2::new(0.0, 5.0));
        assert!(!resolve_player(&mut ball, &player));
    }

    #[test]
    fn test_ground_contact_boundary() {
        let above = ball_at(Vec2::new(320.0, GROUND_Y - BALL_RADIUS - 1.0), Vec2::ZERO);
        assert!(!ground_contact(&above));
        let below = ball_at(Vec2::new(320.0, GROUND_Y - BALL_RADIUS + 1.0), Vec2::ZERO);
        assert!(ground_contact(&below));
    }

    #[test]
    fn test_settle_damps_both_axes() {
        let mut ball = ball_at(Vec2::new(320.0, GROUND_Y), Vec2::new(2.0, 6.0));
        settle_on_ground(&mut ball);
        assert_eq!(ball.pos.y, GROUND_Y - ball.radius);
        assert!((ball.vel.y + 6.0 * BOUNCE_FACTOR).abs() < 1e-5);
        assert!((ball.vel.x - 2.0 * BOUNCE_FACTOR).abs() < 1e-5);
    }
}
