use eframe::egui;

use crate::core::{
    settings::{
        DEFAULT_COURSE_URL,
        DEFAULT_STUDENT_URL,
    },
    Settings,
};

pub struct SettingsModal {
    open: bool,
    original: Settings,
    student_url_input: String,
    course_url_input: String,
    status: Option<String>,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            original: Settings::default(),
            student_url_input: String::new(),
            course_url_input: String::new(),
            status: None,
        }
    }

    pub fn open_settings(&mut self, current: Settings) {
        self.student_url_input = current.student_service_url.clone();
        self.course_url_input = current.course_service_url.clone();
        self.original = current;
        self.status = None;
        self.open = true;
    }

    pub fn is_settings_open(&self) -> bool {
        self.open
    }

    fn drafted(&self) -> Settings {
        Settings {
            student_service_url: self.student_url_input.trim().trim_end_matches('/').to_string(),
            course_service_url: self.course_url_input.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.drafted() != self.original
    }

    pub fn is_valid(&self) -> bool {
        let drafted = self.drafted();
        is_valid_url(&drafted.student_service_url) && is_valid_url(&drafted.course_service_url)
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Settings> {
        if !self.open {
            return None;
        }

        let mut result: Option<Settings> = None;

        let modal = egui::Modal::new(egui::Id::new("service_settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Service Endpoints");
            ui.add_space(10.0);

            egui::Grid::new("service_url_grid").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
                ui.label("Student service URL:");
                ui.add(egui::TextEdit::singleline(&mut self.student_url_input).desired_width(260.0));
                ui.end_row();

                ui.label("Course service URL:");
                ui.add(egui::TextEdit::singleline(&mut self.course_url_input).desired_width(260.0));
                ui.end_row();
            });

            if !self.is_valid() {
                ui.add_space(5.0);
                ui.colored_label(
                    egui::Color32::RED,
                    "⚠ URLs must start with http:// or https://",
                );
            }

            if let Some(status) = &self.status {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_BLUE, "ℹ");
                    ui.label(status);
                });
            }

            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.is_dirty();

            ui.horizontal(|ui| {
                if is_dirty {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                } else {
                    ui.colored_label(egui::Color32::TRANSPARENT, "⚠");
                    ui.label("");
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let save_clicked = ui
                    .add_enabled(is_dirty && self.is_valid(), egui::Button::new("Save Settings"))
                    .clicked();
                let cancel_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Defaults").clicked();
                });

                if save_clicked {
                    let settings = self.drafted();
                    self.original = settings.clone();
                    result = Some(settings);
                    ui.close();
                } else if cancel_clicked {
                    self.student_url_input = self.original.student_service_url.clone();
                    self.course_url_input = self.original.course_service_url.clone();
                    self.status = None;
                } else if reset_clicked {
                    self.student_url_input = DEFAULT_STUDENT_URL.to_string();
                    self.course_url_input = DEFAULT_COURSE_URL.to_string();
                    self.status = Some("Restored default endpoints".to_string());
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(student: &str, course: &str) -> Settings {
        Settings {
            student_service_url: student.to_string(),
            course_service_url: course.to_string(),
        }
    }

    #[test]
    fn opening_copies_current_settings() {
        let mut modal = SettingsModal::new();
        modal.open_settings(settings("http://a:8000", "http://b:8001"));

        assert!(modal.is_settings_open());
        assert!(!modal.is_dirty());
        assert!(modal.is_valid());
    }

    #[test]
    fn editing_marks_dirty_and_trailing_slash_is_ignored() {
        let mut modal = SettingsModal::new();
        modal.open_settings(settings("http://a:8000", "http://b:8001"));

        modal.student_url_input = "http://a:8000/".to_string();
        assert!(!modal.is_dirty());

        modal.student_url_input = "http://other:9000".to_string();
        assert!(modal.is_dirty());
        assert_eq!(modal.drafted().student_service_url, "http://other:9000");
    }

    #[test]
    fn scheme_is_required() {
        let mut modal = SettingsModal::new();
        modal.open_settings(settings("http://a:8000", "http://b:8001"));

        modal.course_url_input = "b:8001".to_string();
        assert!(!modal.is_valid());

        modal.course_url_input = "https://b:8001".to_string();
        assert!(modal.is_valid());
    }
}
