//! Radio playback subject.

use crate::player::Player;

/// A radio player tuned across a fixed station list.
///
/// Mirrors the music player's selection model, but over frequencies: before `start` (and
/// after `stop`) nothing is tuned and the station reads as 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioPlayer {
    stations: Vec<f64>,
    current: Option<usize>,
    on: bool,
    volume: i64,
}

impl RadioPlayer {
    /// Volume change per `volume_up`/`volume_down` call.
    pub const VOLUME_STEP: i64 = 2;

    pub fn new(stations: Vec<f64>) -> Self {
        RadioPlayer {
            stations,
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

    /// The tuned frequency, or 0.0 when nothing is tuned.
    pub fn station(&self) -> f64 {
        self.current
            .and_then(|i| self.stations.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Tune the next station. Saturates at the end of the list; a no-op when nothing is
    /// tuned.
    pub fn next(&mut self) {
        if let Some(i) = self.current {
            if i + 1 < self.stations.len() {
                self.current = Some(i + 1);
            }
        }
    }

    /// Tune the previous station. Saturates at the first station; a no-op when nothing is
    /// tuned.
    pub fn previous(&mut self) {
        if let Some(i) = self.current {
            self.current = Some(i.saturating_sub(1));
        }
    }
}

impl Player for RadioPlayer {
    fn start(&mut self) {
        self.on = true;
        if self.current.is_none() && !self.stations.is_empty() {
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
