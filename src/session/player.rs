//! Media player sub-state — track, transport flag, progress and volume.
//!
//! Transport controls (`toggle_play`, `next`, `previous`, `select_track`,
//! `seek`, `set_volume`) mutate state and command the engine. Engine
//! notifications (`on_time_update`, `on_metadata_loaded`, `on_track_ended`,
//! `on_play_rejected`) only mirror what the engine reports.
//!
//! Only `select_track` auto-plays. `next`/`previous`, and therefore
//! track-ended auto-advance, load the new source paused.

use serde::Serialize;

use crate::catalog::Song;
use crate::session::engine::PlaybackEngine;
use crate::session::{SessionError, step_back, step_forward};

pub const DEFAULT_VOLUME: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    pub track_index: usize,
    pub is_playing: bool,
    pub elapsed_seconds: f64,
    /// 0 until the engine reports metadata for the current track.
    pub total_seconds: f64,
    pub volume: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            track_index: 0,
            is_playing: false,
            elapsed_seconds: 0.0,
            total_seconds: 0.0,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl PlaybackState {
    /// Pause if playing, otherwise ask the engine to play.
    /// A rejected play is logged and leaves the flag unchanged.
    pub fn toggle_play(&mut self, engine: &mut dyn PlaybackEngine) {
        if self.is_playing {
            engine.pause();
            self.is_playing = false;
            return;
        }
        match engine.play() {
            Ok(()) => self.is_playing = true,
            Err(e) => tracing::warn!(error = %e, track = self.track_index, "play failed"),
        }
    }

    pub fn next(&mut self, songs: &[Song], engine: &mut dyn PlaybackEngine) {
        let index = step_forward(self.track_index, songs.len());
        self.change_track(index, songs, engine);
    }

    pub fn previous(&mut self, songs: &[Song], engine: &mut dyn PlaybackEngine) {
        let index = step_back(self.track_index, songs.len());
        self.change_track(index, songs, engine);
    }

    /// Jump to a playlist entry and start it.
    /// `is_playing` ends up true even if the engine refuses; a later
    /// `on_play_rejected` corrects it.
    pub fn select_track(
        &mut self,
        index: usize,
        songs: &[Song],
        engine: &mut dyn PlaybackEngine,
    ) -> Result<(), SessionError> {
        if index >= songs.len() {
            return Err(SessionError::TrackOutOfRange {
                index,
                count: songs.len(),
            });
        }
        self.change_track(index, songs, engine);
        if let Err(e) = engine.play() {
            tracing::warn!(error = %e, track = index, "play after select failed");
        }
        self.is_playing = true;
        Ok(())
    }

    // Loading a new source halts the element, so the flag follows it.
    fn change_track(&mut self, index: usize, songs: &[Song], engine: &mut dyn PlaybackEngine) {
        self.track_index = index;
        self.elapsed_seconds = 0.0;
        self.total_seconds = 0.0;
        self.is_playing = false;
        engine.load(&songs[index].audio);
    }

    pub fn on_time_update(&mut self, elapsed: f64) {
        self.elapsed_seconds = sanitize_seconds(elapsed);
    }

    pub fn on_metadata_loaded(&mut self, duration: f64) {
        self.total_seconds = sanitize_seconds(duration);
    }

    /// Auto-advance with wraparound. Does not resume playback.
    pub fn on_track_ended(&mut self, songs: &[Song], engine: &mut dyn PlaybackEngine) {
        self.next(songs, engine);
    }

    pub fn on_play_rejected(&mut self, reason: &str) {
        tracing::warn!(reason, track = self.track_index, "engine rejected playback");
        self.is_playing = false;
    }

    /// Seek to `fraction` of the known duration. Not clamped.
    pub fn seek(&mut self, fraction: f64, engine: &mut dyn PlaybackEngine) {
        let target = fraction * self.total_seconds;
        self.elapsed_seconds = target;
        engine.seek(target);
    }

    pub fn set_volume(&mut self, volume: f64, engine: &mut dyn PlaybackEngine) {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        self.volume = volume;
        engine.set_volume(volume);
    }

    /// Width of the progress fill, 0–100.
    pub fn progress_percent(&self) -> f64 {
        if self.total_seconds > 0.0 {
            self.elapsed_seconds / self.total_seconds * 100.0
        } else {
            0.0
        }
    }

    pub fn volume_icon(&self) -> &'static str {
        if self.volume > 0.5 {
            "🔊"
        } else if self.volume > 0.0 {
            "🔉"
        } else {
            "🔇"
        }
    }
}

/// Fraction of the progress bar under a click at `offset_px`.
pub fn seek_fraction(offset_px: f64, width_px: f64) -> Result<f64, SessionError> {
    if !(width_px.is_finite() && width_px > 0.0) || !offset_px.is_finite() {
        return Err(SessionError::InvalidSeek(width_px));
    }
    Ok(offset_px / width_px)
}

/// `M:SS` — minutes unpadded, seconds zero-padded.
pub fn format_time(seconds: f64) -> String {
    let total = sanitize_seconds(seconds).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Playlist position label: `01`, `02`, …
pub fn track_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

// Engines report NaN/Infinity before metadata arrives.
fn sanitize_seconds(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
