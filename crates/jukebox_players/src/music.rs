//! Music playback subject.

use crate::player::Player;

/// A playlist-backed music player.
///
/// The current track is an index into the playlist; before `start` (and after `stop`)
/// nothing is selected and the current track reads as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicPlayer {
    songs: Vec<String>,
    current: Option<usize>,
    on: bool,
    volume: i64,
}

impl MusicPlayer {
    /// Volume change per `volume_up`/`volume_down` call.
    pub const VOLUME_STEP: i64 = 1;

    pub fn new(songs: Vec<String>) -> Self {
        MusicPlayer {
            songs,
            current: None,
            on: false,
            volume: 0,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn volume(&self) -> i64 {
        self.volume
    }

    /// The selected track name, or empty text when nothing is selected.
    pub fn current_song(&self) -> String {
        self.current
            .and_then(|i| self.songs.get(i))
            .cloned()
            .unwrap_or_default()
    }

    /// Select the next track. Saturates at the end of the playlist; a no-op when nothing
    /// is selected.
    pub fn next(&mut self) {
        if let Some(i) = self.current {
            if i + 1 < self.songs.len() {
                self.current = Some(i + 1);
            }
        }
    }

    /// Select the previous track. Saturates at the first track; a no-op when nothing is
    /// selected.
    pub fn previous(&mut self) {
        if let Some(i) = self.current {
            self.current = Some(i.saturating_sub(1));
        }
    }
}

impl Player for MusicPlayer {
    fn start(&mut self) {
        self.on = true;
        if self.current.is_none() && !self.songs.is_empty() {
            self.current = Some(0);
        }
    }

    fn stop(&mut self) {
        self.on = false;
        self.current = None;
    }

    fn volume_up(&mut self) {
        self.volume += Self::VOLUME_STEP;
    }

    fn volume_down(&mut self) {
        self.volume -= Self::VOLUME_STEP;
    }
}
