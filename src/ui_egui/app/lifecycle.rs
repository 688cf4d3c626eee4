use super::GreeterApp;
use crate::models::occurrence::OccurrenceInfo;
use crate::models::settings::Settings;
use crate::services::links::{LinkService, UrlOpener};
use crate::ui_egui::resources::{install_fonts, load_window_icon};

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 780.0;

/// Fixed-size, centered window titled after the occurrence year.
pub fn native_options(settings: &Settings, occurrence: &OccurrenceInfo) -> eframe::NativeOptions {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(occurrence.title())
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_resizable(false);

    if let Some(icon) = load_window_icon(settings) {
        viewport = viewport.with_icon(icon);
    }

    eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    }
}

impl GreeterApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: &Settings,
        occurrence: OccurrenceInfo,
    ) -> Self {
        install_fonts(&cc.egui_ctx, settings);

        let app = Self::with_link_service(occurrence, LinkService::new());
        app.theme.apply_to_context(&cc.egui_ctx);
        log::info!(
            "Window ready: year={}, is_today={}, days_left={}",
            occurrence.year,
            occurrence.is_today,
            occurrence.days_left
        );
        app
    }
}

impl<O: UrlOpener> GreeterApp<O> {
    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Footer first so the central panel leaves room for it
        self.render_footer(ctx);

        let actions = self.render_main_panel(ctx);
        if actions.send_greeting {
            self.send_greeting();
        }
        if actions.learn_more {
            self.learn_more();
        }

        self.render_greeting_dialog(ctx);
        self.toast_manager.render(ctx);
    }
}
