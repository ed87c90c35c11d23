use std::sync::Arc;

use catalog::Catalog;
use chrono::Local;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::ChavrutaApp;

const APP_NAME: &str = "Chavruta Digital";

fn main() -> eframe::Result<()> {
    let settings = config::load_settings();
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|err| {
        eprintln!("invalid log_filter '{}': {err}; using info", settings.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(
        initial_view = %settings.initial_view,
        today = ?settings.today,
        booking_horizon_days = settings.booking_horizon_days,
        "starting desktop shell"
    );

    let catalog = Arc::new(Catalog::fixtures());
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, catalog.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    let app_options = settings.app_options(Local::now().date_naive());
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ChavrutaApp::new(
                cmd_tx,
                ui_rx,
                catalog,
                app_options,
            )))
        }),
    )
}
