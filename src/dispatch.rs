//! Collaborator fan-out for simulation events
//!
//! The sim emits typed `GameEvent`s; this module interprets them and invokes
//! the external collaborators (audio, chat, recording, high-score storage).
//! Everything here is fire-and-forget: a disabled or missing collaborator is
//! skipped, never allowed to stall a tick.

use crate::events::GameEvent;
use crate::highscores::HighScore;
use crate::settings::Settings;

/// Named audio cues the game can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Bounce,
    WallBounce,
    GameStart,
    GameOver,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Bounce => "bounce",
            SoundCue::WallBounce => "wall-bounce",
            SoundCue::GameStart => "game-start",
            SoundCue::GameOver => "game-over",
        }
    }
}

/// Plays named cues. Implementations must not block.
pub trait SoundBank {
    fn play(&mut self, cue: SoundCue);
}

/// Receives chat-facing signals from the game
pub trait ChatSink {
    /// Score milestone reached; the sink may burst extra chat activity
    fn milestone(&mut self, score: u32);
    /// Round ended; the sink may post reactions with the final score
    fn game_over(&mut self, score: u32);
}

/// Controls the gameplay recording collaborator
pub trait RecordingControl {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Logging stand-ins for hosts without real collaborators
pub struct LogSoundBank;

impl SoundBank for LogSoundBank {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {}", cue.as_str());
    }
}

pub struct LogChatSink;

impl ChatSink for LogChatSink {
    fn milestone(&mut self, score: u32) {
        log::info!("chat milestone at {score} points");
    }

    fn game_over(&mut self, score: u32) {
        log::info!("chat reacts to game over, final score {score}");
    }
}

pub struct LogRecording;

impl RecordingControl for LogRecording {
    fn start(&mut self) {
        log::debug!("recording requested");
    }

    fn stop(&mut self) {
        log::debug!("recording stop requested");
    }
}

/// Routes drained events to the collaborators
pub struct EventDispatcher<S, C, R> {
    pub sounds: S,
    pub chat: C,
    pub recording: R,
    pub settings: Settings,
    pub high_score: HighScore,
}

impl<S: SoundBank, C: ChatSink, R: RecordingControl> EventDispatcher<S, C, R> {
    pub fn new(sounds: S, chat: C, recording: R, settings: Settings, high_score: HighScore) -> Self {
        Self {
            sounds,
            chat,
            recording,
            settings,
            high_score,
        }
    }

    /// Handle every event drained from a tick, in emission order
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::WallBounce => self.play(SoundCue::WallBounce),
            GameEvent::PlayerBounce => self.play(SoundCue::Bounce),
            GameEvent::ScoreChanged(score) => log::debug!("score: {score}"),
            GameEvent::ChatMilestone { score } => self.chat.milestone(score),
            // Render-side only; nothing to forward
            GameEvent::Supernova { .. } => {}
            GameEvent::GameStart => {
                self.play(SoundCue::GameStart);
                if self.settings.auto_record {
                    self.recording.start();
                }
            }
            GameEvent::GameOver {
                score,
                new_high_score,
                ..
            } => {
                self.play(SoundCue::GameOver);
                self.chat.game_over(score);
                if self.high_score.submit(score) || new_high_score {
                    log::info!("new high score: {score}");
                }
            }
            GameEvent::RecordingStop => self.recording.stop(),
        }
    }

    fn play(&mut self, cue: SoundCue) {
        if self.settings.sound_enabled {
            self.sounds.play(cue);
        }
    }
}
