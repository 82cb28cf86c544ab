use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::animation::AnimationClipId;
use crate::error::GameError;

/// Every texture the game draws. Any of them may be missing; drawing falls
/// back to flat shapes or skips the sprite.
pub struct TextureStore {
    pub background: Option<Texture2D>,
    pub ground: Option<Texture2D>,
    pub coin: Option<Texture2D>,
    clips: FxHashMap<AnimationClipId, Texture2D>,
}

impl TextureStore {
    /// Load `background.png`, `ground.png`, `coin.png` and one sheet per
    /// clip (`idle.png`, `walk.png`, ...) from `dir`.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Self {
        let mut load = |name: &str| match load_texture(rl, thread, &dir.join(name)) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };

        let background = load("background.png");
        let ground = load("ground.png");
        let coin = load("coin.png");
        let clips = AnimationClipId::ALL
            .into_iter()
            .filter_map(|id| load(&format!("{}.png", id.as_str())).map(|tex| (id, tex)))
            .collect::<FxHashMap<_, _>>();

        info!(
            "Loaded textures from {:?}: {} of 4 animation sheets",
            dir,
            clips.len()
        );
        Self {
            background,
            ground,
            coin,
            clips,
        }
    }

    pub fn clip(&self, id: AnimationClipId) -> Option<&Texture2D> {
        self.clips.get(&id)
    }
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, GameError> {
    rl.load_texture(thread, &path.to_string_lossy())
        .map_err(|e| GameError::Asset {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
