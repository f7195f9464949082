//! Headball entry point
//!
//! Runs a fixed-timestep demo session: a scripted autoplayer chases the ball
//! while the logging dispatcher stands in for the audio/chat/recording
//! collaborators. Intended for watching the core play itself and for
//! profiling; the real front end drives `sim::tick` the same way.

use std::time::{Duration, Instant};

use headball::consts::*;
use headball::dispatch::{EventDispatcher, LogChatSink, LogRecording, LogSoundBank};
use headball::events::GameEvent;
use headball::highscores::HighScore;
use headball::settings::Settings;
use headball::sim::{GamePhase, GameWorld, TickInput, tick};

/// Rounds to play before exiting
const DEMO_ROUNDS: u32 = 3;
/// Hard tick limit in case the autoplayer gets too good
const MAX_TICKS: u64 = 60 * 60 * 5;

fn main() {
    env_logger::init();

    let settings = Settings::load(Settings::DEFAULT_FILE);
    let high_score = HighScore::load(HighScore::DEFAULT_FILE);

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Starting demo session with seed {seed}");

    let mut world = GameWorld::new(seed, high_score.score);
    let mut dispatcher =
        EventDispatcher::new(LogSoundBank, LogChatSink, LogRecording, settings, high_score);

    let tick_duration = Duration::from_secs_f32(1.0 / TICK_HZ);
    let mut rounds_finished = 0u32;

    while rounds_finished < DEMO_ROUNDS && world.time_ticks < MAX_TICKS {
        let frame_start = Instant::now();

        let input = autoplay(&world);
        tick(&mut world, &input);

        for event in world.drain_events() {
            if let GameEvent::GameOver { score, .. } = event {
                rounds_finished += 1;
                log::info!("round {rounds_finished} over, score {score}");
            }
            dispatcher.dispatch([event]);
        }

        // Fire-and-reschedule pacing; a slow frame just starts the next
        // tick immediately
        if let Some(remaining) = tick_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!(
        "Demo finished after {} ticks, best score {}",
        world.time_ticks,
        dispatcher.high_score.score
    );
}

/// Scripted player: chase the ball horizontally, start a round when idle,
/// restart once the game-over overlay has fully played out
fn autoplay(world: &GameWorld) -> TickInput {
    let player_center = world.player.pos.x + world.player.width / 2.0;
    let dx = world.ball.pos.x - player_center;

    let start = match world.phase {
        GamePhase::Idle => true,
        GamePhase::GameOver => world.game_over_anim.progress(world.now_ms()) >= 1.0,
        GamePhase::Running => false,
    };

    TickInput {
        move_left: dx < -world.player.speed,
        move_right: dx > world.player.speed,
        start,
    }
}
