use eframe::egui::{
    self,
    containers,
};

use crate::{
    core::{
        tasks::Service,
        Settings,
    },
    gui::{
        settings_modal::SettingsModal,
        View,
    },
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        current_view: View,
        settings_modal: &mut SettingsModal,
        current_settings: &Settings,
        student_service_up: Option<bool>,
        course_service_up: Option<bool>,
    ) -> Option<View> {
        let mut selected = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Service Endpoints").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });

                ui.separator();

                for (view, label) in View::ALL {
                    if ui.selectable_label(current_view == view, label).clicked() {
                        selected = Some(view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, student_service_up, course_service_up);
                });
            });
        });

        selected
    }

    fn show_status_indicators(
        ui: &mut egui::Ui,
        student_service_up: Option<bool>,
        course_service_up: Option<bool>,
    ) {
        Self::status_indicator(ui, Service::Courses, course_service_up);
        ui.add_space(3.0);
        Self::status_indicator(ui, Service::Students, student_service_up);
    }

    fn status_indicator(ui: &mut egui::Ui, service: Service, healthy: Option<bool>) {
        let (color, tooltip) = match healthy {
            Some(true) => {
                (egui::Color32::from_rgb(0, 200, 0), format!("{} is reachable", service.label()))
            }
            Some(false) => (
                egui::Color32::from_rgb(200, 80, 80),
                format!("{} is not responding", service.label()),
            ),
            None => (egui::Color32::GRAY, format!("{} status unknown", service.label())),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(service.label()).on_hover_text(&tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(&tooltip);
        });
    }
}
