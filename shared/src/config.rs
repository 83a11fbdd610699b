use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::surface::PenSettings;

pub const DEFAULT_CANVAS_WIDTH: u32 = 500;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;
pub const DEFAULT_PEN_WIDTH: f32 = 5.0;

/// When the drawing controller writes a snapshot while a stroke is in progress.
///
/// Both variants persist on stroke end and on mode switches.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PersistPolicy {
    /// Write after every rendered segment, so an abruptly closed popup loses nothing.
    #[default]
    EverySegment,
    /// Write only when the stroke ends.
    StrokeEnd,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PopupConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub pen_color: Color,
    pub pen_width: f32,
    pub background_color: Color,
    pub persist_policy: PersistPolicy,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            pen_color: Color::BLACK,
            pen_width: DEFAULT_PEN_WIDTH,
            background_color: Color::WHITE,
            persist_policy: PersistPolicy::default(),
        }
    }
}

impl PopupConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(text)?;
        config.pen_width = PenSettings::clamp_width(config.pen_width).unwrap_or(DEFAULT_PEN_WIDTH);
        if config.canvas_width == 0 || config.canvas_height == 0 {
            log::warn!(
                "ignoring empty canvas size {}x{}",
                config.canvas_width,
                config.canvas_height
            );
            config.canvas_width = DEFAULT_CANVAS_WIDTH;
            config.canvas_height = DEFAULT_CANVAS_HEIGHT;
        }
        Ok(config)
    }

    /// Parses an optional JSON blob, falling back to defaults when it is missing or unreadable.
    pub fn from_json_or_default(text: Option<&str>) -> Self {
        let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(text) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("{error}; using default popup config");
                Self::default()
            }
        }
    }

    pub fn pen(&self) -> PenSettings {
        PenSettings {
            width: self.pen_width,
            color: self.pen_color,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
