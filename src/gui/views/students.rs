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
    core::Student,
    gui::{
        app::RegistraApp,
        forms::StudentForm,
        lists::ListState,
        UiAction,
    },
};

pub struct StudentsView {
    pub list: ListState<Student>,
    pub form: StudentForm,
    /// True while a create/update/delete round trip is pending.
    pub busy: bool,
}

impl Default for StudentsView {
    fn default() -> Self {
        Self { list: ListState::new(), form: StudentForm::new(), busy: false }
    }
}

pub fn show(ctx: &egui::Context, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Students Management");
        ui.add_space(8.0);

        if let Some(message) = app.students.list.last_error() {
            let message = message.to_string();
            error_banner(ui, &app.theme, &message);
        }

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            form_section(ui, app, actions);
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(format!("{} students", app.students.list.items().len()));
                if ui.button("Refresh").clicked() {
                    actions.push(UiAction::RefreshStudents);
                }
            });
            ui.add_space(6.0);

            if app.students.list.is_loading() && app.students.list.items().is_empty() {
                loading_spinner(ui);
            } else {
                table_section(ui, app, actions);
            }
        });
    });
}

fn form_section(ui: &mut egui::Ui, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    let editing = app.students.form.is_editing();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(if editing { "Edit Student" } else { "Add New Student" })
            .strong());
        ui.add_space(6.0);

        egui::Grid::new("student_form_grid").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
            ui.label("First name:");
            ui.add(
                egui::TextEdit::singleline(&mut app.students.form.first_name)
                    .desired_width(220.0),
            );
            ui.end_row();

            ui.label("Last name:");
            ui.add(
                egui::TextEdit::singleline(&mut app.students.form.last_name).desired_width(220.0),
            );
            ui.end_row();

            ui.label("Email:");
            ui.add(egui::TextEdit::singleline(&mut app.students.form.email).desired_width(220.0));
            ui.end_row();

            ui.label("Age:");
            ui.add(egui::TextEdit::singleline(&mut app.students.form.age).desired_width(80.0));
            ui.end_row();

            ui.label("Grade (0-4):");
            ui.add(egui::TextEdit::singleline(&mut app.students.form.grade).desired_width(80.0));
            ui.end_row();
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let submit_label = if app.students.busy {
                "Processing…"
            } else if editing {
                "Update Student"
            } else {
                "Add Student"
            };
            if ui.add_enabled(!app.students.busy, egui::Button::new(submit_label)).clicked() {
                actions.push(UiAction::SubmitStudent);
            }
            if editing && ui.button("Cancel").clicked() {
                actions.push(UiAction::ResetStudentForm);
            }
        });
    });
}

fn table_section(ui: &mut egui::Ui, app: &mut RegistraApp, actions: &mut Vec<UiAction>) {
    let students = app.students.list.items();

    if students.is_empty() {
        ui.colored_label(app.theme.comment(ui.ctx()), "No students found. Add one above!");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(170.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Email");
            });
            header.col(|ui| {
                ui.strong("Age");
            });
            header.col(|ui| {
                ui.strong("Grade");
            });
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|mut body| {
            for (index, student) in students.iter().enumerate() {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(student.full_name());
                    });
                    row.col(|ui| {
                        ui.label(&student.email);
                    });
                    row.col(|ui| {
                        ui.label(student.age.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", student.grade));
                    });
                    row.col(|ui| {
                        if ui.small_button("Edit").clicked() {
                            actions.push(UiAction::EditStudent(index));
                        }
                        if ui.small_button("Enroll").clicked() {
                            actions.push(UiAction::OpenEnroll(index));
                        }
                        if ui.small_button("Delete").clicked() {
                            actions.push(UiAction::DeleteStudent(
                                student.record_id().map(str::to_string),
                            ));
                        }
                    });
                });
            }
        });
}
