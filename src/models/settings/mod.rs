// Settings module
// Explicit layout and style configuration for the month grid

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::utils::math::px_to_num;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Layout constants for the month grid and its see-more popup.
///
/// Pixel fields accept either numbers or CSS px strings (`"44px"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthGridConfig {
    /// 0 = Sunday, 1 = Monday
    pub first_day_of_week: u8,
    /// Always show six week rows
    pub fixed_weeks: bool,
    #[serde(deserialize_with = "deserialize_px")]
    pub event_height: f32,
    #[serde(deserialize_with = "deserialize_px")]
    pub event_margin_top: f32,
    pub more_view: MoreViewConfig,
    pub palette: CellPalette,
}

impl Default for MonthGridConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: 0,
            fixed_weeks: false,
            event_height: 24.0,
            event_margin_top: 2.0,
            more_view: MoreViewConfig::default(),
            palette: CellPalette::default(),
        }
    }
}

impl MonthGridConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Height of one event row including its top margin
    pub fn event_unit_height(&self) -> f32 {
        self.event_height + self.event_margin_top
    }

    pub fn first_weekday(&self) -> chrono::Weekday {
        match self.first_day_of_week {
            1 => chrono::Weekday::Mon,
            _ => chrono::Weekday::Sun,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = self.event_unit_height();
        if !(unit.is_finite() && unit > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "event height plus margin must be positive, got {}",
                unit
            )));
        }
        if self.first_day_of_week > 1 {
            return Err(ConfigError::Invalid(format!(
                "first_day_of_week must be 0 (Sunday) or 1 (Monday), got {}",
                self.first_day_of_week
            )));
        }
        if self.more_view.max_visible_events == 0 {
            return Err(ConfigError::Invalid(
                "more_view.max_visible_events must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// See-more popup metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoreViewConfig {
    #[serde(deserialize_with = "deserialize_px")]
    pub padding: f32,
    #[serde(deserialize_with = "deserialize_px")]
    pub header_height: f32,
    #[serde(deserialize_with = "deserialize_px")]
    pub header_margin_bottom: f32,
    #[serde(deserialize_with = "deserialize_px")]
    pub min_width: f32,
    pub max_visible_events: usize,
    /// Fixed popup width, replaces the computed one
    pub width: Option<f32>,
    /// Fixed popup height, replaces the computed one (still floored)
    pub height: Option<f32>,
}

impl Default for MoreViewConfig {
    fn default() -> Self {
        Self {
            padding: 5.0,
            header_height: 44.0,
            header_margin_bottom: 5.0,
            min_width: 280.0,
            max_visible_events: 10,
            width: None,
            height: None,
        }
    }
}

/// Date label colours (hex)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellPalette {
    pub holiday: String,
    pub saturday: String,
    pub weekday: String,
}

impl Default for CellPalette {
    fn default() -> Self {
        Self {
            holiday: "#ff4040".to_string(),
            saturday: "#333333".to_string(),
            weekday: "#333333".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PxValue {
    Number(f32),
    Text(String),
}

fn deserialize_px<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PxValue::deserialize(deserializer)? {
        PxValue::Number(value) => value,
        PxValue::Text(text) => px_to_num(&text),
    })
}
