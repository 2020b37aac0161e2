// Birthday Countdown Application
// Main entry point

use birthday_countdown::services::settings::SettingsService;
use birthday_countdown::ui_egui::CountdownApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Birthday Countdown");

    let settings_service = SettingsService::from_project_dirs();
    log::debug!("Settings file: {}", settings_service.path().display());
    let settings = settings_service.get_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Birthday Countdown")
            .with_inner_size([960.0, 760.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Birthday Countdown",
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run the countdown window: {err}"))
}
