//! Video playback subject.

use crate::player::Player;

/// A single-title video player with stepwise seeking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPlayer {
    video: String,
    on: bool,
    volume: i64,
    current_time: i64,
}

impl VideoPlayer {
    /// Volume change per `volume_up`/`volume_down` call.
    pub const VOLUME_STEP: i64 = 5;
    /// Seek distance per `fast_forward`/`rewind` call.
    pub const SEEK_STEP: i64 = 5;

    /// A fresh player: off, volume 0, at the start of `video`.
    pub fn new(video: impl Into<String>) -> Self {
        VideoPlayer {
            video: video.into(),
            on: false,
            volume: 0,
            current_time: 0,
        }
    }

    pub fn video(&self) -> &str {
        &self.video
    }

    pub fn set_video(&mut self, video: impl Into<String>) {
        self.video = video.into();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn volume(&self) -> i64 {
        self.volume
    }

    /// Elapsed playback position.
    pub fn current_time(&self) -> i64 {
        self.current_time
    }

    /// Step the position forward. Seeking only moves while the player is on.
    pub fn fast_forward(&mut self) {
        if self.on {
            self.current_time += Self::SEEK_STEP;
        }
    }

    /// Step the position back. Seeking only moves while the player is on.
    pub fn rewind(&mut self) {
        if self.on {
            self.current_time -= Self::SEEK_STEP;
        }
    }
}

impl Player for VideoPlayer {
    fn start(&mut self) {
        self.on = true;
    }

    fn stop(&mut self) {
        self.on = false;
    }

    fn volume_up(&mut self) {
        self.volume += Self::VOLUME_STEP;
    }

    fn volume_down(&mut self) {
        self.volume -= Self::VOLUME_STEP;
    }
}
