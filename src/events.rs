//! Outbound signals from the simulation core
//!
//! The core performs no I/O of its own. Each tick appends `GameEvent`s to the
//! world's queue; the caller drains them after the tick and hands them to the
//! dispatcher. Emission is fire-and-forget: nothing in the core waits on a
//! collaborator.

use glam::Vec2;

/// A signal emitted by the simulation for external collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball reflected off the left or right wall
    WallBounce,
    /// Ball bounced off the player's head
    PlayerBounce,
    /// Score changed; carries the new value
    ScoreChanged(u32),
    /// Score milestone reached; collaborators may burst extra chat activity
    ChatMilestone { score: u32 },
    /// A supernova visual was triggered with these parameters
    Supernova {
        pos: Vec2,
        max_radius: f32,
        alpha: f32,
    },
    /// A round started
    GameStart,
    /// Round ended; the score has already been checked against the best
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
    /// Any active gameplay recording should stop
    RecordingStop,
}
