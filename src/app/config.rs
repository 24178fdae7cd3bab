//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use super::pacer::PacingStrategy;

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width, also the arena width
    pub width: f64,
    /// Window height, also the arena height
    pub height: f64,
    /// Whether the window has a title bar and borders
    pub decorated: bool,
    /// Whether the window can be resized
    pub resizable: bool,
    /// Whether to enable vsync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Paddle Bounce".to_string(),
            width: 800.0,
            height: 600.0,
            decorated: false,
            resizable: false,
            vsync: true,
        }
    }
}

/// Frame pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Frames per second the pacer aims for
    pub target_fps: u32,
    /// How the pacer waits out the rest of a frame
    pub pacing: PacingStrategy,
}

impl FrameConfig {
    /// Whole milliseconds per frame (33 at 30 FPS)
    pub fn frame_target_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            pacing: PacingStrategy::Sleep,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Frame pacing configuration
    #[serde(default)]
    pub frame: FrameConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources, later ones winning:
    /// 1. config/{profile}.toml
    /// 2. Environment variables with prefix APP_ (e.g., APP_FRAME__TARGET_FPS=60)
    ///
    /// The config directory is searched for next to the executable first,
    /// then in the current directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Self::find_config_dir().as_deref(), profile)
    }

    /// Loads a profile from an explicit config directory
    pub fn load_from(config_dir: Option<&Path>, profile: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(config_dir, profile, Self::environment())
    }

    /// APP_ prefix, __ between nested fields (e.g., APP_WINDOW__WIDTH)
    fn environment() -> Environment {
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        config_dir: Option<&Path>,
        profile: &str,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        builder = builder.add_source(env);

        let config = builder.set_override("profile", profile)?.build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Rejects values the game loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame.target_fps == 0 || self.frame.target_fps > 1000 {
            return Err(ConfigError::Message(format!(
                "frame.target_fps must be between 1 and 1000, got {}",
                self.frame.target_fps
            )));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Message(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }

    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Built-in settings, used when no profile can be loaded
    pub fn builtin(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            window: WindowConfig::default(),
            frame: FrameConfig::default(),
        }
    }
}
