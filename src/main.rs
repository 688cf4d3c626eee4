// International Men's Day greeter
// Main entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mens_day_greeter::services::countdown;
use mens_day_greeter::services::settings::SettingsService;
use mens_day_greeter::ui_egui;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    log::info!("Starting International Men's Day App...");

    let settings_service = SettingsService::from_default_location();
    let settings = settings_service.get_or_default();
    let occurrence = countdown::compute_for(settings.today_override);

    match ui_egui::run(settings, occurrence) {
        Ok(()) => {
            log::info!("Window closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("An error occurred while running the app: {}", e);
            ExitCode::FAILURE
        }
    }
}
