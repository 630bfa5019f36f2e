// Storefront Site Application
// Main entry point

use anyhow::{anyhow, Context, Result};
use storefront_site::services::settings::SettingsService;
use storefront_site::ui_egui::SiteApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Storefront site");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = settings_service.load_or_default();

    // Widget timers run here; the runtime outlives the window
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("site-timers")
        .enable_time()
        .build()
        .context("Failed to start timer runtime")?;
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Storefront")
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size(SiteApp::min_window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Storefront",
        native_options,
        Box::new(move |cc| Ok(Box::new(SiteApp::new(cc, settings, handle)))),
    )
    .map_err(|e| anyhow!("Window event loop failed: {}", e))?;

    runtime.shutdown_background();
    Ok(())
}
