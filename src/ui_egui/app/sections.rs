//! Main window layout: header, countdown, objectives, dedication and footer.

use super::GreeterApp;
use crate::services::links::UrlOpener;
use egui::{Align, Color32, FontId, Layout, Margin, RichText, Stroke};

const OBJECTIVES: [&str; 5] = [
    "💪 Promote positive male role models",
    "🎉 Celebrate men's contributions to society, family & community",
    "❤️ Raise awareness about men's physical and mental health",
    "⚖️ Promote gender equality and mutual respect",
    "🌍 Create a safer, better world where everyone can thrive",
];

const FOOTER_LINES: [&str; 3] = [
    "International Men's Day • November 19 Every Year",
    "Founded in 1999 • Celebrated in over 90 countries worldwide",
    "#InternationalMensDay #MenDoingGood",
];

const PROGRESS_BAR_SIZE: egui::Vec2 = egui::vec2(200.0, 10.0);

/// Buttons pressed (or Enter hit) during this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct PanelActions {
    pub send_greeting: bool,
    pub learn_more: bool,
}

impl<O: UrlOpener> GreeterApp<O> {
    pub(super) fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.app_background)
                    .inner_margin(Margin::symmetric(0.0, 25.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    for line in FOOTER_LINES {
                        ui.label(RichText::new(line).size(9.0).italics().color(self.theme.footer));
                    }
                });
            });
    }

    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) -> PanelActions {
        let mut actions = PanelActions::default();
        let panel_frame = egui::Frame::none().fill(self.theme.app_background);

        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            // The greeting dialog is modal over everything below it
            ui.add_enabled_ui(!self.is_dialog_open(), |ui| {
                ui.vertical_centered(|ui| {
                    self.render_header(ui);
                    self.render_objectives(ui);
                    self.render_dedication(ui, &mut actions);
                });
            });
        });

        actions
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;
        let occurrence = &self.occurrence;

        ui.add_space(30.0);
        ui.label(
            RichText::new("HAPPY INTERNATIONAL MEN'S DAY!")
                .size(26.0)
                .strong()
                .color(theme.title),
        );
        ui.add_space(5.0);
        ui.label(RichText::new(occurrence.date_label()).size(18.0).color(theme.date));
        ui.add_space(15.0);

        let headline = RichText::new(occurrence.headline()).size(15.0);
        let headline = if occurrence.is_today {
            headline.strong().color(theme.accent)
        } else {
            headline.italics().color(theme.countdown)
        };
        ui.label(headline);

        if let (Some(label), Some(fraction)) =
            (occurrence.progress_label(), occurrence.progress_fraction())
        {
            ui.add_space(10.0);
            ui.label(RichText::new(label).size(10.0).color(theme.date));
            ui.add_space(5.0);

            let (rect, _) = ui.allocate_exact_size(PROGRESS_BAR_SIZE, egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, theme.progress_track);
            let mut filled = rect;
            filled.set_width(rect.width() * fraction);
            ui.painter().rect_filled(filled, 0.0, theme.progress_fill);
        }
    }

    fn render_objectives(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;

        ui.add_space(25.0);
        egui::Frame::none()
            .fill(theme.card_background)
            .stroke(Stroke::new(2.0, theme.progress_track))
            .rounding(4.0)
            .inner_margin(Margin::symmetric(40.0, 15.0))
            .outer_margin(Margin::symmetric(60.0, 0.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("🌟 Core Objectives of International Men's Day 🌟")
                            .size(14.0)
                            .strong()
                            .color(theme.card_heading),
                    );
                });
                ui.add_space(12.0);
                ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                    for objective in OBJECTIVES {
                        ui.label(RichText::new(objective).size(12.0).color(theme.body_text));
                        ui.add_space(5.0);
                    }
                });
            });
    }

    fn render_dedication(&mut self, ui: &mut egui::Ui, actions: &mut PanelActions) {
        ui.add_space(30.0);
        ui.label(
            RichText::new("💌 Dedicate this day to a man who inspires you:")
                .size(15.0)
                .color(self.theme.accent),
        );
        ui.add_space(10.0);

        let entry = egui::Frame::none()
            .fill(self.theme.entry_background)
            .stroke(Stroke::new(3.0, self.theme.card_heading))
            .inner_margin(Margin::symmetric(6.0, 8.0))
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.name_input)
                        .desired_width(460.0)
                        .font(FontId::proportional(14.0))
                        .text_color(Color32::WHITE)
                        .horizontal_align(Align::Center)
                        .frame(false),
                )
            })
            .inner;

        if self.focus_name_entry && !self.is_dialog_open() {
            entry.request_focus();
            self.focus_name_entry = false;
        }
        if entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.send_greeting = true;
        }

        ui.add_space(15.0);
        let row_size = egui::vec2(500.0, 48.0);
        ui.allocate_ui_with_layout(row_size, Layout::left_to_right(Align::Center), |ui| {
            let send = egui::Button::new(
                RichText::new("Send Heartfelt Greeting")
                    .size(14.0)
                    .strong()
                    .color(Color32::WHITE),
            )
            .fill(self.theme.primary_button)
            .min_size(egui::vec2(260.0, 44.0));
            if ui.add(send).clicked() {
                actions.send_greeting = true;
            }

            ui.add_space(10.0);

            let learn_more = egui::Button::new(
                RichText::new("Learn More About IMD").size(12.0).color(Color32::WHITE),
            )
            .fill(self.theme.secondary_button)
            .min_size(egui::vec2(200.0, 36.0));
            if ui.add(learn_more).clicked() {
                actions.learn_more = true;
            }
        });
    }
}
