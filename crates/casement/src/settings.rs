//! Window settings, loadable from TOML or RON files

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents did not parse as settings.
    #[error("parse error: {0}")]
    Parse(String),

    /// The settings could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// The file extension maps to no supported format.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

/// Initial properties of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title.
    pub title: String,
    /// Initial width, in screen coordinates.
    pub width: u32,
    /// Initial height, in screen coordinates.
    pub height: u32,
    /// Whether the user may resize the window.
    pub resizable: bool,
    /// Whether the window is visible on creation. An invisible window can
    /// be shown later with [`Window::show`](crate::Window::show).
    pub visible: bool,
    /// Name of the monitor to go fullscreen on, or `None` for windowed.
    pub fullscreen: Option<String>,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "untitled".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            visible: true,
            fullscreen: None,
        }
    }
}

impl WindowSettings {
    /// Load settings from a `.toml` or `.ron` file. Missing fields take
    /// their defaults.
    pub fn load_from_file(path: &str) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| SettingsError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| SettingsError::Parse(e.to_string()))
        } else {
            Err(SettingsError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save settings to a `.toml` or `.ron` file.
    pub fn save_to_file(&self, path: &str) -> Result<(), SettingsError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| SettingsError::Serialize(e.to_string()))?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}
