use eframe::egui;

use crate::gui::theme::Theme;

pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod students;

pub fn error_banner(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    let accent = theme.red(ui.ctx());
    egui::Frame::group(ui.style()).stroke(egui::Stroke::new(1.0, accent)).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(accent, "✖");
            ui.colored_label(accent, message);
        });
    });
    ui.add_space(8.0);
}

pub fn loading_spinner(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.add(egui::Spinner::new().size(48.0));
        ui.add_space(40.0);
    });
}
