//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`MB_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use multiball_math::Vec2;
use multiball_physics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            simulation: SimulationConfig::default(),
            rendering: RenderingConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`MB_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // MB_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("MB_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Number of windows to open
    pub count: u32,
    /// Initial x position of every window, in desktop coordinates
    pub x: i32,
    /// Initial y position of every window, in desktop coordinates
    pub y: i32,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Allow resizing
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Multiball".to_string(),
            count: 5,
            x: 20,
            y: 20,
            width: 400,
            height: 400,
            resizable: true,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// World-space width balls reflect off
    pub world_width: f32,
    /// World-space height balls reflect off
    pub world_height: f32,
    /// Sleep between physics ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Largest accepted elapsed time per tick, in seconds
    pub max_dt: f32,
    /// Initial ball position [x, y]
    pub ball_start: [f32; 2],
    /// Initial ball velocity [x, y] in units per second
    pub ball_velocity: [f32; 2],
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_width: SCREEN_WIDTH,
            world_height: SCREEN_HEIGHT,
            tick_interval_ms: 10,
            max_dt: 0.25,
            ball_start: [200.0, 200.0],
            ball_velocity: [100.0, 30.0],
        }
    }
}

impl SimulationConfig {
    /// World bounds as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    /// Tick sleep as a duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Entity color [r, g, b, a]
    pub foreground_color: [f32; 4],
    /// Side length of the square drawn per entity, in pixels
    pub entity_size: f32,
    /// Refresh cap in frames per second (0 = uncapped)
    pub max_fps: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            foreground_color: [1.0, 1.0, 1.0, 1.0],
            entity_size: 10.0,
            max_fps: 60,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.count, 5);
        assert_eq!(config.window.width, 400);
        assert_eq!(config.simulation.world_width, 1024.0);
        assert_eq!(config.simulation.world_height, 600.0);
        assert_eq!(config.rendering.entity_size, 10.0);
    }

    #[test]
    fn test_simulation_helpers() {
        let config = SimulationConfig::default();
        assert_eq!(config.bounds(), Vec2::new(1024.0, 600.0));
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("tick_interval_ms"));
    }
}
