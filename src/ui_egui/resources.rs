//! Icon and font setup for the window, each with a silent fallback.

use crate::models::settings::{FontChoice, Settings};
use crate::services::assets::{load_font_bytes, load_png_rgba, system_font_dirs};
use egui::{FontData, FontDefinitions, FontFamily};

const CUSTOM_FONT_KEY: &str = "greeter-custom";

/// Window icon from settings, or `None` to keep the platform default.
pub fn load_window_icon(settings: &Settings) -> Option<egui::IconData> {
    if !settings.use_icon {
        return None;
    }

    match load_png_rgba(&settings.icon_path) {
        Ok(image) => {
            log::info!("Loaded window icon from {}", settings.icon_path.display());
            Some(egui::IconData {
                rgba: image.rgba,
                width: image.width,
                height: image.height,
            })
        }
        Err(e) => {
            log::warn!("Window icon unavailable, using default: {}", e);
            None
        }
    }
}

/// Font definitions for the configured family, falling back to egui's own.
pub fn font_definitions(choice: &FontChoice) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    let FontChoice::Family(family) = choice else {
        return fonts;
    };

    match load_font_bytes(family, &system_font_dirs()) {
        Ok(bytes) => {
            log::info!("Using font family '{}'", family);
            fonts
                .font_data
                .insert(CUSTOM_FONT_KEY.to_owned(), FontData::from_owned(bytes));
            // Keep egui's fonts behind ours for emoji and missing glyphs
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, CUSTOM_FONT_KEY.to_owned());
        }
        Err(e) => log::warn!("{}; using built-in fonts", e),
    }

    fonts
}

pub fn install_fonts(ctx: &egui::Context, settings: &Settings) {
    ctx.set_fonts(font_definitions(&settings.font_choice()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_icon_disabled() {
        let settings = Settings {
            use_icon: false,
            ..Settings::default()
        };
        assert!(load_window_icon(&settings).is_none());
    }

    #[test]
    fn test_missing_icon_falls_back() {
        let settings = Settings {
            icon_path: PathBuf::from("/definitely/not/here/icon.png"),
            ..Settings::default()
        };
        assert!(load_window_icon(&settings).is_none());
    }

    #[test]
    fn test_system_default_font_keeps_egui_fonts() {
        let fonts = font_definitions(&FontChoice::SystemDefault);
        assert!(!fonts.font_data.contains_key(CUSTOM_FONT_KEY));
    }

    #[test]
    fn test_unknown_font_keeps_egui_fonts() {
        let fonts = font_definitions(&FontChoice::Family("No Such Font Family 9000".into()));
        assert!(!fonts.font_data.contains_key(CUSTOM_FONT_KEY));
        assert_eq!(
            fonts.families.get(&FontFamily::Proportional),
            FontDefinitions::default().families.get(&FontFamily::Proportional)
        );
    }
}
