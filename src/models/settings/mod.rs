// Settings module
// Read-only presentation options loaded from settings.toml

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Setting value meaning "use egui's built-in fonts".
pub const SYSTEM_DEFAULT_FONT: &str = "system-default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Try to load a custom window icon
    pub use_icon: bool,
    /// PNG file used when `use_icon` is set
    pub icon_path: PathBuf,
    /// Font family name, or "system-default"
    pub font_family: String,
    /// Pretend today is this date instead of the wall-clock date
    pub today_override: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_icon: true,
            icon_path: PathBuf::from("mens_day_icon.png"),
            font_family: "Segoe UI".to_string(),
            today_override: None,
        }
    }
}

impl Settings {
    pub fn font_choice(&self) -> FontChoice {
        FontChoice::from_setting(&self.font_family)
    }
}

/// Which font the window should try to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    SystemDefault,
    Family(String),
}

impl FontChoice {
    pub fn from_setting(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(SYSTEM_DEFAULT_FONT) {
            Self::SystemDefault
        } else {
            Self::Family(value.to_string())
        }
    }
}
