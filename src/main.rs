#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use registra::gui::RegistraApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Registra")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Registra",
        options,
        Box::new(|cc| Ok(Box::new(RegistraApp::new(cc)))),
    )
}
