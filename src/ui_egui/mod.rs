mod app;
pub mod resources;
pub mod theme;

pub use app::{native_options, GreeterApp};

use crate::models::occurrence::OccurrenceInfo;
use crate::models::settings::Settings;

pub const APP_NAME: &str = "International Men's Day";

/// Open the greeter window and block until it is closed.
pub fn run(settings: Settings, occurrence: OccurrenceInfo) -> eframe::Result<()> {
    let options = native_options(&settings, &occurrence);
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(GreeterApp::new(cc, &settings, occurrence)))),
    )
}
