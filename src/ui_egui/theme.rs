//! Theme module for the greeter window
//!
//! Defines the GreeterTheme palette and how it maps onto egui::Visuals.

use egui::Color32;

/// Colors used across the greeter window
#[derive(Debug, Clone, PartialEq)]
pub struct GreeterTheme {
    /// Window background
    pub app_background: Color32,
    /// Main heading
    pub title: Color32,
    /// "November 19, YYYY" label and progress label
    pub date: Color32,
    /// Celebration banner and dedication prompt
    pub accent: Color32,
    /// Countdown line
    pub countdown: Color32,
    /// Progress bar track
    pub progress_track: Color32,
    /// Progress bar fill
    pub progress_fill: Color32,
    /// Objectives card background
    pub card_background: Color32,
    /// Objectives card heading and entry border
    pub card_heading: Color32,
    /// Objectives text
    pub body_text: Color32,
    /// Name entry background
    pub entry_background: Color32,
    /// "Send" button
    pub primary_button: Color32,
    /// "Learn more" button
    pub secondary_button: Color32,
    pub secondary_button_hover: Color32,
    /// Footer text
    pub footer: Color32,
}

impl Default for GreeterTheme {
    fn default() -> Self {
        Self::navy()
    }
}

impl GreeterTheme {
    /// The dark navy palette the window ships with
    pub fn navy() -> Self {
        Self {
            app_background: Color32::from_rgb(0x0a, 0x16, 0x26),
            title: Color32::from_rgb(0x00, 0xd0, 0xff),
            date: Color32::from_rgb(0xa0, 0xe7, 0xff),
            accent: Color32::from_rgb(0xff, 0xb4, 0x00),
            countdown: Color32::from_rgb(0x4c, 0xc9, 0xf0),
            progress_track: Color32::from_rgb(0x1a, 0x32, 0x50),
            progress_fill: Color32::from_rgb(0x00, 0xd0, 0xff),
            card_background: Color32::from_rgb(0x11, 0x22, 0x40),
            card_heading: Color32::from_rgb(0x00, 0xb4, 0xd8),
            body_text: Color32::from_rgb(0xe0, 0xf2, 0xff),
            entry_background: Color32::from_rgb(0x1a, 0x32, 0x50),
            primary_button: Color32::from_rgb(0x00, 0x77, 0xb6),
            secondary_button: Color32::from_rgb(0x1a, 0x32, 0x50),
            secondary_button_hover: Color32::from_rgb(0x2a, 0x42, 0x60),
            footer: Color32::from_rgb(0x6c, 0x8b, 0xa8),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.card_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.entry_background;

        visuals.widgets.inactive.bg_fill = self.secondary_button;
        visuals.widgets.inactive.weak_bg_fill = self.secondary_button;
        visuals.widgets.hovered.bg_fill = self.secondary_button_hover;
        visuals.widgets.hovered.weak_bg_fill = self.secondary_button_hover;
        visuals.widgets.active.bg_fill = self.secondary_button_hover;
        visuals.widgets.active.weak_bg_fill = self.secondary_button_hover;

        visuals.selection.bg_fill = self.primary_button;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.card_heading);

        ctx.set_visuals(visuals);
    }
}
