#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::QcycleApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 600.0])
            .with_title("QCycle"),
        ..Default::default()
    };

    eframe::run_native(
        "QCycle",
        options,
        Box::new(|cc| Ok(Box::new(QcycleApp::new(cc)?))),
    )
}
