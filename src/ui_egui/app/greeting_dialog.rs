use super::GreeterApp;
use crate::services::links::UrlOpener;
use egui::{Context, RichText};

impl<O: UrlOpener> GreeterApp<O> {
    /// Modal-style window showing the composed greeting until dismissed.
    pub(super) fn render_greeting_dialog(&mut self, ctx: &Context) {
        let Some(greeting) = &self.open_greeting else {
            return;
        };

        let mut dialog_open = true;
        let mut dismissed = false;

        egui::Window::new(greeting.title.as_str())
            .open(&mut dialog_open)
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(360.0);
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(15.0, 10.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&greeting.body)
                                .size(13.0)
                                .color(self.theme.body_text),
                        );
                    });
                ui.separator();
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || !dialog_open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dismiss_greeting();
        }
    }
}
