mod greeting_dialog;
mod lifecycle;
mod sections;
mod toast;

use self::toast::ToastManager;
use crate::models::greeting::Greeting;
use crate::models::occurrence::OccurrenceInfo;
use crate::services::greeting::compose_from_input;
use crate::services::links::{LinkService, SystemBrowser, UrlOpener};
use crate::ui_egui::theme::GreeterTheme;

pub use self::lifecycle::native_options;

pub struct GreeterApp<O: UrlOpener = SystemBrowser> {
    /// Computed once at startup
    occurrence: OccurrenceInfo,
    theme: GreeterTheme,
    /// Contents of the dedication entry
    name_input: String,
    /// Greeting currently shown in the dialog; blocks the main panel
    open_greeting: Option<Greeting>,
    /// Give the name entry keyboard focus on the next frame
    focus_name_entry: bool,
    link_service: LinkService<O>,
    toast_manager: ToastManager,
}

impl<O: UrlOpener> eframe::App for GreeterApp<O> {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl<O: UrlOpener> GreeterApp<O> {
    fn with_link_service(occurrence: OccurrenceInfo, link_service: LinkService<O>) -> Self {
        Self {
            occurrence,
            theme: GreeterTheme::navy(),
            name_input: String::new(),
            open_greeting: None,
            focus_name_entry: true,
            link_service,
            toast_manager: ToastManager::new(),
        }
    }

    pub fn occurrence(&self) -> &OccurrenceInfo {
        &self.occurrence
    }

    fn is_dialog_open(&self) -> bool {
        self.open_greeting.is_some()
    }

    /// Validate the entry and open the greeting dialog, or warn.
    fn send_greeting(&mut self) {
        if self.is_dialog_open() {
            return;
        }

        match compose_from_input(&self.name_input, self.occurrence.year) {
            Ok(greeting) => {
                log::info!("Showing greeting dialog");
                self.open_greeting = Some(greeting);
                self.name_input.clear();
            }
            Err(e) => {
                self.toast_manager.warning(e.heading(), e.to_string());
                self.focus_name_entry = true;
            }
        }
    }

    fn learn_more(&mut self) {
        if self.is_dialog_open() {
            return;
        }

        if let Err(e) = self.link_service.open_learn_more() {
            log::error!("{:#}", e);
            self.toast_manager.error("Could not open the International Men's Day website");
        }
    }

    /// Close the greeting dialog and hand focus back to the entry.
    fn dismiss_greeting(&mut self) {
        self.open_greeting = None;
        self.focus_name_entry = true;
    }
}
