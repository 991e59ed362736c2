use eframe::egui;

use super::{
    error_banner,
    loading_spinner,
};
use crate::{
    core::tasks::DashboardStats,
    gui::{
        app::RegistraApp,
        UiAction,
        View,
    },
};

#[derive(Default)]
pub struct DashboardView {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

pub fn show(ctx: &egui::Context, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Dashboard");
        ui.add_space(8.0);

        if let Some(message) = app.dashboard.error.clone() {
            error_banner(ui, &app.theme, &message);
        }

        if app.dashboard.loading && app.dashboard.stats.is_none() {
            loading_spinner(ui);
            return;
        }

        ui.horizontal(|ui| {
            stat_card(
                ui,
                app,
                actions,
                "Total Students",
                app.dashboard.stats.as_ref().map(|stats| stats.total_students),
                "Manage Students",
                View::Students,
            );
            ui.add_space(12.0);
            stat_card(
                ui,
                app,
                actions,
                "Total Courses",
                app.dashboard.stats.as_ref().map(|stats| stats.total_courses),
                "Manage Courses",
                View::Courses,
            );
        });

        ui.add_space(16.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new("System Information").strong());
            ui.add_space(4.0);
            ui.label(format!("Student service: {}", app.settings.student_service_url));
            ui.label(format!("Course service: {}", app.settings.course_service_url));
        });

        ui.add_space(12.0);
        if ui.button("Refresh").clicked() {
            actions.push(UiAction::RefreshDashboard);
        }
    });
}

fn stat_card(
    ui: &mut egui::Ui,
    app: &RegistraApp,
    actions: &mut Vec<UiAction>,
    title: &str,
    count: Option<usize>,
    button_label: &str,
    target: View,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(180.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).strong());
            match count {
                Some(count) => {
                    ui.label(
                        egui::RichText::new(count.to_string())
                            .size(32.0)
                            .color(app.theme.cyan(ui.ctx())),
                    );
                }
                None => {
                    ui.colored_label(app.theme.comment(ui.ctx()), "—");
                }
            }
            ui.add_space(4.0);
            if ui.button(button_label).clicked() {
                actions.push(UiAction::SwitchView(target));
            }
        });
    });
}
