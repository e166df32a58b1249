//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [assets]
//! dir = ./assets
//!
//! [gameplay]
//! spawn_interval_ms = 200
//! ramp_interval_ms = 300
//! speed_mod_increment = 1.5
//! fuel_max = 50000
//! population_initial = 300
//! fuel_pickup_amount = 10000
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::difficulty::DEFAULT_SPEED_MOD_INCREMENT;
use crate::resources::playerstate::{DEFAULT_FUEL_MAX, DEFAULT_POPULATION, POPULATION_MAX};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_SPAWN_INTERVAL_MS: u32 = 200;
const DEFAULT_RAMP_INTERVAL_MS: u32 = 300;
const DEFAULT_FUEL_PICKUP_AMOUNT: i32 = 10000;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the asset directory, and the gameplay tunables.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Directory holding sprites and fonts.
    pub assets_dir: PathBuf,
    /// Period of the spawn roll.
    pub spawn_interval_ms: u32,
    /// Period of the difficulty ramp.
    pub ramp_interval_ms: u32,
    /// Speed modifier added on every ramp tick.
    pub speed_mod_increment: f32,
    /// Capacity of the soap meter, in milliseconds of play.
    pub fuel_max: i32,
    /// People at the start of a run.
    pub population_initial: i32,
    /// Fuel restored by a mini soap.
    pub fuel_pickup_amount: i32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            ramp_interval_ms: DEFAULT_RAMP_INTERVAL_MS,
            speed_mod_increment: DEFAULT_SPEED_MOD_INCREMENT,
            fuel_max: DEFAULT_FUEL_MAX,
            population_initial: DEFAULT_POPULATION,
            fuel_pickup_amount: DEFAULT_FUEL_PICKUP_AMOUNT,
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

    /// Spawn roll period in seconds.
    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval_ms as f32 / 1000.0
    }

    /// Difficulty ramp period in seconds.
    pub fn ramp_interval(&self) -> f32 {
        self.ramp_interval_ms as f32 / 1000.0
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, spawn={}ms, ramp={}ms (+{}), fuel={}, people={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.spawn_interval_ms,
            self.ramp_interval_ms,
            self.speed_mod_increment,
            self.fuel_max,
            self.population_initial
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = uint_value(config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = uint_value(config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = uint_value(config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        // [gameplay] section
        if let Some(ms) = uint_value(config, "gameplay", "spawn_interval_ms") {
            self.spawn_interval_ms = ms;
        }
        if let Some(ms) = uint_value(config, "gameplay", "ramp_interval_ms") {
            self.ramp_interval_ms = ms;
        }
        if let Some(inc) = config
            .getfloat("gameplay", "speed_mod_increment")
            .ok()
            .flatten()
        {
            self.speed_mod_increment = inc as f32;
        }
        if let Some(fuel) = int_value(config, "gameplay", "fuel_max") {
            self.fuel_max = fuel.max(1);
        }
        if let Some(people) = int_value(config, "gameplay", "population_initial") {
            if people > POPULATION_MAX {
                warn!(
                    "population_initial = {} exceeds the maximum, using {}",
                    people, POPULATION_MAX
                );
            }
            self.population_initial = people.clamp(1, POPULATION_MAX);
        }
        if let Some(amount) = int_value(config, "gameplay", "fuel_pickup_amount") {
            self.fuel_pickup_amount = amount;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [assets] section
        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );

        // [gameplay] section
        config.set(
            "gameplay",
            "spawn_interval_ms",
            Some(self.spawn_interval_ms.to_string()),
        );
        config.set(
            "gameplay",
            "ramp_interval_ms",
            Some(self.ramp_interval_ms.to_string()),
        );
        config.set(
            "gameplay",
            "speed_mod_increment",
            Some(self.speed_mod_increment.to_string()),
        );
        config.set("gameplay", "fuel_max", Some(self.fuel_max.to_string()));
        config.set(
            "gameplay",
            "population_initial",
            Some(self.population_initial.to_string()),
        );
        config.set(
            "gameplay",
            "fuel_pickup_amount",
            Some(self.fuel_pickup_amount.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Unsigned `key` of `section`, or `None` when absent or too large for `u32`.
fn uint_value(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {}.{} = {}: out of range", section, key, value);
            None
        }
    }
}

/// Signed `key` of `section`, or `None` when absent or outside `i32`.
fn int_value(config: &Ini, section: &str, key: &str) -> Option<i32> {
    let value = config.getint(section, key).ok().flatten()?;
    match i32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {}.{} = {}: out of range", section, key, value);
            None
        }
    }
}
