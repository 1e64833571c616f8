mod app;
mod board;
mod config;

use anyhow::anyhow;
use eframe::egui;
use eframe::run_native;

use app::GridOfLife;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.window.title)
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    let title = config.window.title.clone();
    run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(GridOfLife::new(&config)))),
    )
    .map_err(|e| anyhow!("event loop failed: {e}"))
}
