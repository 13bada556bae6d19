//! JSON settings for the stepper: initial value, bounds and appearance.
//!
//! Every field is optional; missing fields take the defaults of
//! [`StepperSettings::default`].

use crate::models::{BoundedCounter, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_VALUE};
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::{parse_color, Color, Mod, Style};
use crate::ui::widgets::{ButtonConfig, StepperConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".stepper";
const SETTINGS_FILE: &str = "stepper.json";

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidColor { field: &'static str, value: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings json: {e}"),
            SettingsError::InvalidColor { field, value } => {
                write!(f, "invalid color for `{field}`: {value:?}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::InvalidColor { .. } => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperSettings {
    pub value: i64,
    pub min_value: i64,
    pub max_value: i64,
    pub button_spacing: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_fg: Option<String>,
    pub value_bold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_disabled_fg: Option<String>,
    pub button_bordered: bool,
    pub button_padding: u16,
}

impl Default for StepperSettings {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            button_spacing: 1,
            value_fg: None,
            value_bold: false,
            button_fg: None,
            button_bg: None,
            button_disabled_fg: Some("dark_gray".to_string()),
            button_bordered: false,
            button_padding: 1,
        }
    }
}

impl StepperSettings {
    pub fn counter(&self) -> BoundedCounter {
        BoundedCounter::with_bounds(self.value, self.min_value, self.max_value)
    }

    pub fn to_config(&self) -> Result<StepperConfig, SettingsError> {
        let mut value_style = Style::default();
        if let Some(fg) = color("value_fg", self.value_fg.as_deref())? {
            value_style = value_style.fg(fg);
        }
        if self.value_bold {
            value_style = value_style.add_mod(Mod::BOLD);
        }

        let mut button = ButtonConfig {
            padding_x: self.button_padding,
            border: self.button_bordered.then_some(BorderKind::Rounded),
            ..ButtonConfig::default()
        };
        let fg = color("button_fg", self.button_fg.as_deref())?;
        let bg = color("button_bg", self.button_bg.as_deref())?;
        if fg.is_some() || bg.is_some() {
            button.style = Style {
                fg,
                bg,
                mods: Mod::BOLD,
            };
        }
        if let Some(disabled) = color("button_disabled_fg", self.button_disabled_fg.as_deref())? {
            button.disabled_style = Style {
                fg: Some(disabled),
                bg,
                mods: Mod::DIM,
            };
        }

        Ok(StepperConfig {
            button,
            button_spacing: self.button_spacing,
            value_style,
            value_formatter: None,
        })
    }
}

fn color(field: &'static str, value: Option<&str>) -> Result<Option<Color>, SettingsError> {
    let Some(value) = value else {
        return Ok(None);
    };
    parse_color(value)
        .map(Some)
        .ok_or_else(|| SettingsError::InvalidColor {
            field,
            value: value.to_string(),
        })
}

pub fn parse_settings(text: &str) -> Result<StepperSettings, SettingsError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_settings(path: &Path) -> Result<StepperSettings, SettingsError> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(&text)
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Writes default settings to `path` unless a file already exists there.
pub fn ensure_settings_file_at(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&StepperSettings::default())
            .map_err(io::Error::other)?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "cannot determine settings directory")
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(SETTINGS_DIR).join("logs"))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot determine cache directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_CACHE_HOME").filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
