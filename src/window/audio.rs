//! Background music.
//!
//! Music is optional: if the audio device or the file is missing the game
//! runs silently and the toggle key does nothing.

use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;

pub const MUSIC_VOLUME: f32 = 0.3;

/// On/off state of the background music. Toggling is ignored until the
/// track finished loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MusicToggle {
    loaded: bool,
    enabled: bool,
}

impl MusicToggle {
    /// Music starts off even when loaded.
    pub fn new(loaded: bool) -> Self {
        Self {
            loaded,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the music on or off. Returns the new state, or `None` when there
    /// is nothing to play.
    pub fn toggle(&mut self) -> Option<bool> {
        if !self.loaded {
            return None;
        }
        self.enabled = !self.enabled;
        Some(self.enabled)
    }
}

/// Load the looping background track at the game's music volume.
pub fn load_music<'aud>(audio: &'aud RaylibAudio, path: &Path) -> Option<Music<'aud>> {
    match audio.new_music(&path.to_string_lossy()) {
        Ok(music) => {
            music.set_volume(MUSIC_VOLUME);
            info!("Loaded music {:?}", path);
            Some(music)
        }
        Err(e) => {
            warn!("No music at {:?}: {}", path, e);
            None
        }
    }
}

/// Apply a toggle to the stream.
pub fn apply_toggle(music: &Music<'_>, enabled: bool) {
    if enabled {
        music.play_stream();
    } else {
        music.pause_stream();
    }
}
