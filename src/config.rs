// src/config.rs

//! Configuration for the platform layer.
//!
//! Settings are grouped into serde-deserializable structs with defaults for
//! every field, so a missing or partial configuration file always yields a
//! usable configuration. Persistence is a JSON file; the platform saves it
//! whenever the windowed size or the fullscreen mode changes.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file.
///
/// `$XDG_CONFIG_HOME/ironpark/platform.json`, falling back to
/// `$HOME/.config/ironpark/platform.json`.
static DEFAULT_CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("ironpark").join("platform.json")
});

/// The window/fullscreen mode the display is driven in.
///
/// `Exclusive` changes the display's actual video mode; `Borderless` sizes
/// the window to the full desktop without a mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenMode {
    #[default]
    Windowed,
    Exclusive,
    Borderless,
}

/// Display-related settings read and written by the platform layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the window in windowed mode, in pixels.
    pub window_width: u32,
    /// Height of the window in windowed mode, in pixels.
    pub window_height: u32,
    /// Target width for exclusive fullscreen. `None` until seeded from the
    /// resolution catalog's largest entry.
    pub fullscreen_width: Option<u32>,
    /// Target height for exclusive fullscreen.
    pub fullscreen_height: Option<u32>,
    /// Mode applied at startup and toggled by Alt+Enter.
    pub fullscreen_mode: FullscreenMode,
    /// If true, the resolution catalog keeps modes whose aspect ratio does
    /// not match the desktop's.
    pub allow_any_aspect_ratio: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            window_width: 640,
            window_height: 480,
            fullscreen_width: None,
            fullscreen_height: None,
            fullscreen_mode: FullscreenMode::Windowed,
            allow_any_aspect_ratio: false,
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

/// Owns the loaded configuration and the path it persists to.
#[derive(Debug)]
pub struct ConfigManager {
    config: Config,
    path: PathBuf,
}

impl ConfigManager {
    /// Loads the configuration from `path`, falling back to defaults if the
    /// file does not exist or cannot be parsed. A parse failure is logged
    /// rather than escalated; the engine can always run on defaults.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse configuration at {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Config::default()
                }
            },
            Err(e) => {
                debug!(
                    "No configuration at {} ({}). Using defaults.",
                    path.display(),
                    e
                );
                Config::default()
            }
        };
        ConfigManager { config, path }
    }

    /// Loads from the default configuration path.
    pub fn load_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH.clone())
    }

    /// Wraps an already-built configuration without touching the filesystem
    /// until the first `save`.
    pub fn from_config(config: Config, path: impl Into<PathBuf>) -> Self {
        ConfigManager {
            config,
            path: path.into(),
        }
    }

    /// Writes the current configuration back to its file, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(&self.config)
            .context("Failed to serialize configuration")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!("Configuration saved to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayConfig {
        &mut self.config.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let manager = ConfigManager::load("/nonexistent/ironpark-test/platform.json");
        assert_eq!(manager.display(), &DisplayConfig::default());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = std::env::temp_dir().join(format!("ironpark-config-{}", std::process::id()));
        let path = dir.join("platform.json");

        let mut manager = ConfigManager::from_config(Config::default(), &path);
        manager.display_mut().window_width = 1280;
        manager.display_mut().window_height = 720;
        manager.display_mut().fullscreen_mode = FullscreenMode::Borderless;
        manager.save().expect("save should succeed");

        let reloaded = ConfigManager::load(&path);
        assert_eq!(reloaded.display().window_width, 1280);
        assert_eq!(reloaded.display().window_height, 720);
        assert_eq!(
            reloaded.display().fullscreen_mode,
            FullscreenMode::Borderless
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "display": { "window_width": 800 } }"#).unwrap();
        assert_eq!(config.display.window_width, 800);
        assert_eq!(config.display.window_height, 480);
        assert_eq!(config.display.fullscreen_width, None);
        assert!(!config.display.allow_any_aspect_ratio);
    }
}
