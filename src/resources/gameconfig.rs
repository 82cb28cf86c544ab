//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults matching the reference tuning and methods to load/save the file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! title = Coin Runner
//!
//! [simulation]
//! tick_rate = 60
//! max_steps_per_frame = 5
//!
//! [player]
//! width = 128
//! height = 128
//! start_x = 50
//! hitbox_width_ratio = 0.3
//! hitbox_height_ratio = 0.5
//!
//! [physics]
//! gravity = 1
//! jump_impulse = 15
//! accel = 0.2
//! max_speed = 4
//! run_multiplier = 1.8
//! friction = 0.1
//! facing_deadzone = 0.1
//!
//! [animation]
//! frame_interval = 10
//!
//! [coins]
//! spawn_interval_ms = 5000
//! size = 32
//! min_height = 50
//! max_height = 150
//! max_active = 0
//! seed = 42
//!
//! [ground]
//! tile_width = 64
//! tile_height = 64
//!
//! [assets]
//! dir = assets
//! ```
//!
//! `max_active = 0` means no cap on active coins. Without `seed` the coin
//! spawner is seeded from the OS.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::error::GameError;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Coin Runner";
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 5;
const DEFAULT_FRAME_INTERVAL: u32 = 10;
const DEFAULT_TILE_SIZE: f32 = 64.0;
const DEFAULT_ASSET_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Player body and movement tuning, in world units and ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub hitbox_width_ratio: f32,
    pub hitbox_height_ratio: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub accel: f32,
    pub max_speed: f32,
    pub run_multiplier: f32,
    pub friction: f32,
    pub facing_deadzone: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 128.0,
            height: 128.0,
            start_x: 50.0,
            hitbox_width_ratio: 0.3,
            hitbox_height_ratio: 0.5,
            gravity: 1.0,
            jump_impulse: 15.0,
            accel: 0.2,
            max_speed: 4.0,
            run_multiplier: 1.8,
            friction: 0.1,
            facing_deadzone: 0.1,
        }
    }
}

/// Coin spawner tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinTuning {
    /// Wall-clock time between spawns.
    pub spawn_interval_ms: u64,
    /// Coins are square.
    pub size: f32,
    /// Lowest spawn height above the ground line.
    pub min_height: f32,
    /// Highest spawn height above the ground line.
    pub max_height: f32,
    pub max_active: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for CoinTuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 5000,
            size: 32.0,
            min_height: 50.0,
            max_height: 150.0,
            max_active: None,
            seed: None,
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window (and initial viewport) width in pixels.
    pub window_width: u32,
    /// Window (and initial viewport) height in pixels.
    pub window_height: u32,
    /// Display frame rate requested from the window.
    pub target_fps: u32,
    pub title: String,
    /// Simulation ticks per second. Physics constants are tuned for 60.
    pub tick_rate: u32,
    /// Upper bound of ticks run for one display frame.
    pub max_steps_per_frame: u32,
    pub frame_interval: u32,
    pub tile_width: f32,
    /// Height of the ground strip; the ground line sits this far above the
    /// bottom of the viewport.
    pub tile_height: f32,
    pub asset_dir: PathBuf,
    pub player: PlayerTuning,
    pub coins: CoinTuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the reference default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            tick_rate: DEFAULT_TICK_RATE,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            player: PlayerTuning::default(),
            coins: CoinTuning::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), GameError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| GameError::Config {
            path: self.config_path.clone(),
            message: e,
        })?;
        self.apply_ini(&config);
        self.sanitize();

        info!(
            "Loaded config: {}x{} window, fps={}, tick_rate={}, coins every {}ms",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.tick_rate,
            self.coins.spawn_interval_ms
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), GameError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(|e| GameError::Config {
            path: self.config_path.clone(),
            message: e,
        })?;
        self.apply_ini(&config);
        self.sanitize();
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        read_u32(config, "window", "width", &mut self.window_width);
        read_u32(config, "window", "height", &mut self.window_height);
        read_u32(config, "window", "target_fps", &mut self.target_fps);
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [simulation] section
        read_u32(config, "simulation", "tick_rate", &mut self.tick_rate);
        read_u32(
            config,
            "simulation",
            "max_steps_per_frame",
            &mut self.max_steps_per_frame,
        );

        // [player] section
        let p = &mut self.player;
        read_f32(config, "player", "width", &mut p.width);
        read_f32(config, "player", "height", &mut p.height);
        read_f32(config, "player", "start_x", &mut p.start_x);
        read_f32(config, "player", "hitbox_width_ratio", &mut p.hitbox_width_ratio);
        read_f32(config, "player", "hitbox_height_ratio", &mut p.hitbox_height_ratio);

        // [physics] section
        read_f32(config, "physics", "gravity", &mut p.gravity);
        read_f32(config, "physics", "jump_impulse", &mut p.jump_impulse);
        read_f32(config, "physics", "accel", &mut p.accel);
        read_f32(config, "physics", "max_speed", &mut p.max_speed);
        read_f32(config, "physics", "run_multiplier", &mut p.run_multiplier);
        read_f32(config, "physics", "friction", &mut p.friction);
        read_f32(config, "physics", "facing_deadzone", &mut p.facing_deadzone);

        // [animation] section
        read_u32(config, "animation", "frame_interval", &mut self.frame_interval);

        // [coins] section
        let c = &mut self.coins;
        if let Some(ms) = config.getuint("coins", "spawn_interval_ms").ok().flatten() {
            c.spawn_interval_ms = ms;
        }
        read_f32(config, "coins", "size", &mut c.size);
        read_f32(config, "coins", "min_height", &mut c.min_height);
        read_f32(config, "coins", "max_height", &mut c.max_height);
        if let Some(max) = config.getuint("coins", "max_active").ok().flatten() {
            c.max_active = usize::try_from(max).ok().filter(|max| *max > 0);
        }
        if let Some(seed) = config.getuint("coins", "seed").ok().flatten() {
            c.seed = Some(seed);
        }

        // [ground] section
        read_f32(config, "ground", "tile_width", &mut self.tile_width);
        read_f32(config, "ground", "tile_height", &mut self.tile_height);

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.asset_dir = PathBuf::from(dir);
        }
    }

    /// Replace values the simulation cannot run with.
    fn sanitize(&mut self) {
        if self.tick_rate == 0 {
            self.tick_rate = DEFAULT_TICK_RATE;
        }
        if self.max_steps_per_frame == 0 {
            self.max_steps_per_frame = 1;
        }
        if self.target_fps == 0 {
            self.target_fps = DEFAULT_TARGET_FPS;
        }
        if self.coins.spawn_interval_ms == 0 {
            self.coins.spawn_interval_ms = CoinTuning::default().spawn_interval_ms;
        }
        if self.coins.min_height > self.coins.max_height {
            std::mem::swap(&mut self.coins.min_height, &mut self.coins.max_height);
        }

        let defaults = PlayerTuning::default();
        let p = &mut self.player;
        if p.width <= 0.0 {
            warn!("player width {} is not positive, using {}", p.width, defaults.width);
            p.width = defaults.width;
        }
        if p.height <= 0.0 {
            warn!("player height {} is not positive, using {}", p.height, defaults.height);
            p.height = defaults.height;
        }
        // accel above 1 overshoots the target speed and oscillates.
        if !(p.accel > 0.0 && p.accel <= 1.0) {
            let accel = p.accel.clamp(f32::EPSILON, 1.0);
            warn!("physics accel {} is outside (0, 1], using {}", p.accel, accel);
            p.accel = accel;
        }
        if !(0.0..=1.0).contains(&p.friction) {
            let friction = p.friction.clamp(0.0, 1.0);
            warn!("physics friction {} is outside [0, 1], using {}", p.friction, friction);
            p.friction = friction;
        }
        if self.coins.size <= 0.0 {
            let size = CoinTuning::default().size;
            warn!("coin size {} is not positive, using {}", self.coins.size, size);
            self.coins.size = size;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), GameError> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        set("window", "width", self.window_width.to_string());
        set("window", "height", self.window_height.to_string());
        set("window", "target_fps", self.target_fps.to_string());
        set("window", "title", self.title.clone());

        set("simulation", "tick_rate", self.tick_rate.to_string());
        set(
            "simulation",
            "max_steps_per_frame",
            self.max_steps_per_frame.to_string(),
        );

        let p = &self.player;
        set("player", "width", p.width.to_string());
        set("player", "height", p.height.to_string());
        set("player", "start_x", p.start_x.to_string());
        set("player", "hitbox_width_ratio", p.hitbox_width_ratio.to_string());
        set("player", "hitbox_height_ratio", p.hitbox_height_ratio.to_string());

        set("physics", "gravity", p.gravity.to_string());
        set("physics", "jump_impulse", p.jump_impulse.to_string());
        set("physics", "accel", p.accel.to_string());
        set("physics", "max_speed", p.max_speed.to_string());
        set("physics", "run_multiplier", p.run_multiplier.to_string());
        set("physics", "friction", p.friction.to_string());
        set("physics", "facing_deadzone", p.facing_deadzone.to_string());

        set("animation", "frame_interval", self.frame_interval.to_string());

        let c = &self.coins;
        set("coins", "spawn_interval_ms", c.spawn_interval_ms.to_string());
        set("coins", "size", c.size.to_string());
        set("coins", "min_height", c.min_height.to_string());
        set("coins", "max_height", c.max_height.to_string());
        set("coins", "max_active", c.max_active.unwrap_or(0).to_string());
        if let Some(seed) = c.seed {
            set("coins", "seed", seed.to_string());
        }

        set("ground", "tile_width", self.tile_width.to_string());
        set("ground", "tile_height", self.tile_height.to_string());
        set("assets", "dir", self.asset_dir.display().to_string());

        config
            .write(&self.config_path)
            .map_err(|source| GameError::ConfigSave {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

fn read_u32(config: &Ini, section: &str, key: &str, target: &mut u32) {
    if let Some(value) = config.getuint(section, key).ok().flatten() {
        match u32::try_from(value) {
            Ok(value) => *target = value,
            Err(_) => warn!("[{}] {} = {} is out of range, ignored", section, key, value),
        }
    }
}

fn read_f32(config: &Ini, section: &str, key: &str, target: &mut f32) {
    if let Some(value) = config.getfloat(section, key).ok().flatten()
        && value.is_finite()
    {
        *target = value as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let config = GameConfig::new();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.frame_interval, 10);
        assert_eq!(config.tile_height, 64.0);
        assert_eq!(config.player.gravity, 1.0);
        assert_eq!(config.player.jump_impulse, 15.0);
        assert_eq!(config.player.max_speed, 4.0);
        assert_eq!(config.coins.spawn_interval_ms, 5000);
        assert_eq!(config.coins.max_active, None);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 800\n\n[physics]\nmax_speed = 6.5\n\n[coins]\nmax_active = 3\nseed = 7\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.player.max_speed, 6.5);
        assert_eq!(config.player.accel, 0.2);
        assert_eq!(config.coins.max_active, Some(3));
        assert_eq!(config.coins.seed, Some(7));
    }

    #[test]
    fn test_zero_max_active_means_unbounded() {
        let mut config = GameConfig::new();
        config.load_from_str("[coins]\nmax_active = 0\n").unwrap();
        assert_eq!(config.coins.max_active, None);
    }

    #[test]
    fn test_sanitize_fixes_unusable_values() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[simulation]\ntick_rate = 0\nmax_steps_per_frame = 0\n\n[coins]\nmin_height = 200\nmax_height = 20\n",
            )
            .unwrap();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.max_steps_per_frame, 1);
        assert_eq!(config.coins.min_height, 20.0);
        assert_eq!(config.coins.max_height, 200.0);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut config = GameConfig::with_path("./definitely/not/here/config.ini");
        let err = config.load_from_file().unwrap_err();
        assert!(matches!(err, GameError::Config { .. }));
        // Defaults survive a failed load.
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let path = std::env::temp_dir().join(format!(
            "coinrunner_config_test_{}.ini",
            std::process::id()
        ));
        let mut config = GameConfig::with_path(&path);
        config.window_width = 1024;
        config.player.friction = 0.25;
        config.coins.seed = Some(99);
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.window_width, 1024);
        assert_eq!(loaded.player.friction, 0.25);
        assert_eq!(loaded.coins.seed, Some(99));
    }

    #[test]
    fn test_sanitize_clamps_broken_tuning() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[player]\nwidth = 0\nheight = -5\n\n[physics]\naccel = 2.5\nfriction = -0.3\n\n[coins]\nsize = 0\n",
            )
            .unwrap();
        assert_eq!(config.player.width, 128.0);
        assert_eq!(config.player.height, 128.0);
        assert_eq!(config.player.accel, 1.0);
        assert_eq!(config.player.friction, 0.0);
        assert_eq!(config.coins.size, 32.0);

        config.load_from_str("[physics]\naccel = 0\nfriction = 4\n").unwrap();
        assert!(config.player.accel > 0.0 && config.player.accel <= 1.0);
        assert_eq!(config.player.friction, 1.0);
    }

    #[test]
    fn test_oversized_integer_keeps_previous_value() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 4294967296\nheight = 600\n")
            .unwrap();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 600);
    }
}
