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
    core::Course,
    gui::{
        app::RegistraApp,
        forms::CourseForm,
        lists::ListState,
        UiAction,
    },
};

pub struct CoursesView {
    pub list: ListState<Course>,
    pub form: CourseForm,
    pub busy: bool,
}

impl Default for CoursesView {
    fn default() -> Self {
        Self { list: ListState::new(), form: CourseForm::new(), busy: false }
    }
}

pub fn show(ctx: &egui::Context, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Courses Management");
        ui.add_space(8.0);

        if let Some(message) = app.courses.list.last_error() {
            let message = message.to_string();
            error_banner(ui, &app.theme, &message);
        }

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            form_section(ui, app, actions);
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(format!("{} courses", app.courses.list.items().len()));
                if ui.button("Refresh").clicked() {
                    actions.push(UiAction::RefreshCourses);
                }
            });
            ui.add_space(6.0);

            if app.courses.list.is_loading() && app.courses.list.items().is_empty() {
                loading_spinner(ui);
            } else {
                table_section(ui, app, actions);
            }
        });
    });
}

fn form_section(ui: &mut egui::Ui, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    let editing = app.courses.form.is_editing();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(
            egui::RichText::new(if editing { "Edit Course" } else { "Add New Course" }).strong(),
        );
        ui.add_space(6.0);

        egui::Grid::new("course_form_grid").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
            ui.label("Course code:");
            ui.add(egui::TextEdit::singleline(&mut app.courses.form.code).desired_width(220.0));
            ui.end_row();

            ui.label("Course name:");
            ui.add(egui::TextEdit::singleline(&mut app.courses.form.name).desired_width(220.0));
            ui.end_row();

            ui.label("Description:");
            ui.add(
                egui::TextEdit::multiline(&mut app.courses.form.description)
                    .desired_width(220.0)
                    .desired_rows(2),
            );
            ui.end_row();

            ui.label("Credits:");
            ui.add(egui::TextEdit::singleline(&mut app.courses.form.credits).desired_width(80.0));
            ui.end_row();

            ui.label("Instructor:");
            ui.add(
                egui::TextEdit::singleline(&mut app.courses.form.instructor).desired_width(220.0),
            );
            ui.end_row();

            ui.label("Max students:");
            ui.add(
                egui::TextEdit::singleline(&mut app.courses.form.max_students).desired_width(80.0),
            );
            ui.end_row();
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let submit_label = if app.courses.busy {
                "Processing…"
            } else if editing {
                "Update Course"
            } else {
                "Add Course"
            };
            if ui.add_enabled(!app.courses.busy, egui::Button::new(submit_label)).clicked() {
                actions.push(UiAction::SubmitCourse);
            }
            if editing && ui.button("Cancel").clicked() {
                actions.push(UiAction::ResetCourseForm);
            }
        });
    });
}

fn table_section(ui: &mut egui::Ui, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    let courses = app.courses.list.items();

    if courses.is_empty() {
        ui.colored_label(app.theme.comment(ui.ctx()), "No courses found. Add one above!");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(120.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Code");
            });
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Instructor");
            });
            header.col(|ui| {
                ui.strong("Credits");
            });
            header.col(|ui| {
                ui.strong("Enrollment");
            });
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|mut body| {
            for (index, course) in courses.iter().enumerate() {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&course.code);
                    });
                    row.col(|ui| {
                        let response = ui.label(&course.name);
                        if !course.description.trim().is_empty() {
                            response.on_hover_text(&course.description);
                        }
                    });
                    row.col(|ui| {
                        ui.label(&course.instructor);
                    });
                    row.col(|ui| {
                        ui.label(course.credits.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!(
                            "{} / {}",
                            course.enrolled_students.len(),
                            course.max_students
                        ));
                    });
                    row.col(|ui| {
                        if ui.small_button("Edit").clicked() {
                            actions.push(UiAction::EditCourse(index));
                        }
                        if ui.small_button("Delete").clicked() {
                            actions.push(UiAction::DeleteCourse(
                                course.record_id().map(str::to_string),
                            ));
                        }
                    });
                });
            }
        });
}
