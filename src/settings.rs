//! Loader settings with persistence
//!
//! Settings are read from `~/.config/lumen/settings.toml` unless a path is
//! given on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use lumen_core::Aabb;
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

/// All CLI settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub loader: LoaderSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lumen"))
    }

    /// Get the default settings file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from `path` (or the default location), falling back to
    /// defaults if the file is missing or invalid.
    ///
    /// Nothing is logged here since this runs before the subscriber exists;
    /// the returned [`SettingsSource`] says what happened.
    pub fn load(path: Option<&Path>) -> (Self, SettingsSource) {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return (Self::default(), SettingsSource::NoConfigDir),
            },
        };

        if !path.exists() {
            return (Self::default(), SettingsSource::Missing(path));
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(settings) => (settings, SettingsSource::File(path)),
                Err(e) => (
                    Self::default(),
                    SettingsSource::Invalid(path, format!("failed to parse settings: {}", e)),
                ),
            },
            Err(e) => (
                Self::default(),
                SettingsSource::Invalid(path, format!("failed to read settings file: {}", e)),
            ),
        }
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Where [`Settings::load`] got its values from
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsSource {
    /// Read from this file
    File(PathBuf),
    /// No file at this path, defaults used
    Missing(PathBuf),
    /// The file exists but could not be used, defaults used
    Invalid(PathBuf, String),
    /// No config directory on this platform, defaults used
    NoConfigDir,
}

impl SettingsSource {
    /// True when the file was present but discarded
    pub fn is_fallback(&self) -> bool {
        matches!(self, SettingsSource::Invalid(..) | SettingsSource::NoConfigDir)
    }

    /// Emit the outcome of the load
    pub fn log(&self) {
        match self {
            SettingsSource::File(path) => info!("Loaded settings from {:?}", path),
            SettingsSource::Missing(path) => {
                info!("No settings file at {:?}, using defaults", path)
            }
            SettingsSource::Invalid(path, reason) => {
                warn!("Settings at {:?} ignored ({}), using defaults", path, reason)
            }
            SettingsSource::NoConfigDir => {
                warn!("Could not determine config directory, using defaults")
            }
        }
    }
}

/// Mesh loading settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Min corner of the volume imported meshes are rescaled into
    pub target_min: [f32; 3],
    /// Max corner of that volume
    pub target_max: [f32; 3],
    /// Texture used when none is given on the command line
    pub default_texture: Option<PathBuf>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            target_min: [-1.0, -1.0, -1.0],
            target_max: [1.0, 1.0, 1.0],
            default_texture: None,
        }
    }
}

impl LoaderSettings {
    /// Target volume as a box
    pub fn target(&self) -> Aabb {
        Aabb::new(Vec3::from(self.target_min), Vec3::from(self.target_max))
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Parsed level, INFO if unrecognised
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}
