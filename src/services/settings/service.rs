use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads presentation settings from a TOML file. Nothing is ever written back.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointed at the platform config directory.
    pub fn from_default_location() -> Self {
        Self::new(resolve_settings_path())
    }

    /// Read settings. A missing file is not an error and yields defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        parse_settings(&raw).with_context(|| format!("Invalid settings in {}", self.path.display()))
    }

    /// Like `get`, but any failure is logged and replaced by defaults.
    pub fn get_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }
}

pub fn parse_settings(raw: &str) -> Result<Settings> {
    toml::from_str(raw).context("Failed to parse settings TOML")
}

fn resolve_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "KenBoyle", "MensDayGreeter") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::FontChoice;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "font_family = \"system-default\"\n").unwrap();

        let settings = SettingsService::new(&path).get().unwrap();
        assert_eq!(settings.font_choice(), FontChoice::SystemDefault);
        assert!(settings.use_icon);
    }

    #[test]
    fn test_full_file() {
        let settings = parse_settings(
            r#"
            use_icon = false
            icon_path = "assets/icon.png"
            font_family = "Arial"
            today_override = "2024-11-19"
            "#,
        )
        .unwrap();

        assert!(!settings.use_icon);
        assert_eq!(settings.icon_path, PathBuf::from("assets/icon.png"));
        assert_eq!(settings.font_choice(), FontChoice::Family("Arial".into()));
        assert_eq!(settings.today_override, NaiveDate::from_ymd_opt(2024, 11, 19));
    }

    #[test]
    fn test_malformed_file_is_error_but_default_fallback_works() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "use_icon = \"maybe\"").unwrap();

        let service = SettingsService::new(&path);
        assert!(service.get().is_err());
        assert_eq!(service.get_or_default(), Settings::default());
    }
}
