use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    error_banner,
    loading_spinner,
};
use crate::{
    core::CourseRoster,
    gui::{
        app::RegistraApp,
        UiAction,
    },
};

/// Read-only roster view: every course with the resolved records of its
/// enrolled students.
pub fn show(ctx: &egui::Context, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Course Enrollments");
        ui.add_space(8.0);

        if let Some(message) = app.rosters.last_error() {
            let message = message.to_string();
            error_banner(ui, &app.theme, &message);
        }

        ui.horizontal(|ui| {
            ui.label(format!("{} courses", app.rosters.items().len()));
            if ui.button("Refresh").clicked() {
                actions.push(UiAction::RefreshRosters);
            }
        });
        ui.add_space(6.0);

        if app.rosters.is_loading() && app.rosters.items().is_empty() {
            loading_spinner(ui);
            return;
        }

        if app.rosters.items().is_empty() {
            ui.colored_label(app.theme.comment(ui.ctx()), "No courses found.");
            return;
        }

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for (index, roster) in app.rosters.items().iter().enumerate() {
                roster_card(ui, app, roster, index);
                ui.add_space(10.0);
            }
        });
    });
}

fn roster_card(ui: &mut egui::Ui, app: &RegistraApp, roster: &CourseRoster, index: usize) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&roster.course.name).strong());
            ui.colored_label(app.theme.comment(ui.ctx()), &roster.course.code);
        });
        ui.label(format!("Instructor: {}", roster.course.instructor));
        ui.label(format!(
            "Enrollment: {} / {} students",
            roster.students.len(),
            roster.course.max_students
        ));
        ui.add_space(6.0);

        if roster.students.is_empty() {
            ui.colored_label(app.theme.comment(ui.ctx()), "No students enrolled yet.");
            return;
        }

        // Each card gets its own id scope so the tables do not collide
        ui.push_id(roster.course.record_id().map(str::to_string).unwrap_or_else(|| index.to_string()), |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().at_least(140.0))
                .column(Column::remainder().at_least(180.0))
                .column(Column::auto().at_least(60.0))
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Name");
                    });
                    header.col(|ui| {
                        ui.strong("Email");
                    });
                    header.col(|ui| {
                        ui.strong("Grade");
                    });
                })
                .body(|mut body| {
                    for student in &roster.students {
                        body.row(24.0, |mut row| {
                            row.col(|ui| {
                                ui.label(student.full_name());
                            });
                            row.col(|ui| {
                                ui.label(&student.email);
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.1}", student.grade));
                            });
                        });
                    }
                });
        });
    });
}
