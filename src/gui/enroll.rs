use eframe::egui;

use crate::{
    core::{
        ApiError,
        Course,
        Student,
    },
    gui::{
        theme::Theme,
        UiAction,
    },
};

/// Enrollment dialog for one student: the course catalog on one side, the
/// registration call on the other. The cached catalog is only pruned after
/// the server confirms a registration; a failure leaves it untouched.
pub struct EnrollModal {
    open: bool,
    student_id: String,
    student_name: String,
    available: Vec<Course>,
    loading_catalog: bool,
    enrolling: bool,
    error: Option<String>,
    success: Option<String>,
}

impl EnrollModal {
    pub fn new() -> Self {
        Self {
            open: false,
            student_id: String::new(),
            student_name: String::new(),
            available: Vec::new(),
            loading_catalog: false,
            enrolling: false,
            error: None,
            success: None,
        }
    }

    pub fn open_for(&mut self, student: &Student, student_id: &str) {
        self.open = true;
        self.student_id = student_id.to_string();
        self.student_name = student.full_name();
        self.available.clear();
        self.loading_catalog = true;
        self.enrolling = false;
        self.error = None;
        self.success = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_busy(&self) -> bool {
        self.open && (self.loading_catalog || self.enrolling)
    }

    pub fn available(&self) -> &[Course] {
        &self.available
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn set_catalog(&mut self, result: Result<Vec<Course>, ApiError>) {
        self.loading_catalog = false;
        match result {
            Ok(courses) => self.available = courses,
            Err(error) => {
                self.error = Some(format!("Failed to fetch available courses: {error}"))
            }
        }
    }

    /// Apply a registration outcome. Results for a student other than the
    /// one the dialog is currently open for are stale and ignored. On
    /// success the course leaves the cached list and the caller gets `true`;
    /// on failure prior state stays as it was.
    pub fn handle_enrolled(
        &mut self,
        student_id: &str,
        course_id: &str,
        result: Result<Student, ApiError>,
    ) -> bool {
        if !self.open || student_id != self.student_id {
            return false;
        }

        self.enrolling = false;
        match result {
            Ok(_) => {
                let name = self
                    .available
                    .iter()
                    .find(|course| course.record_id() == Some(course_id))
                    .map(|course| course.name.clone())
                    .unwrap_or_else(|| "course".to_string());
                self.available.retain(|course| course.record_id() != Some(course_id));
                self.error = None;
                self.success = Some(format!("Successfully enrolled in {name}!"));
                true
            }
            Err(error) => {
                self.error = Some(error.user_message("Failed to enroll in course"));
                false
            }
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<UiAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let modal = egui::Modal::new(egui::Id::new("enroll_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading(format!("Enroll {}", self.student_name));
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Available Courses").strong());
            ui.add_space(8.0);

            if let Some(error) = &self.error {
                ui.colored_label(theme.red(ui.ctx()), error);
                ui.add_space(6.0);
            }
            if let Some(success) = &self.success {
                ui.colored_label(theme.green(ui.ctx()), success);
                ui.add_space(6.0);
            }

            if self.loading_catalog {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading courses…");
                });
            } else if self.available.is_empty() {
                ui.colored_label(theme.comment(ui.ctx()), "No courses available.");
            } else {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for course in &self.available {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.label(egui::RichText::new(&course.name).strong());
                            ui.label(&course.code);
                            ui.label(format!("Credits: {}", course.credits));
                            ui.label(format!("Instructor: {}", course.instructor));

                            let label = if self.enrolling { "Enrolling…" } else { "Enroll" };
                            let button = ui.add_enabled(
                                !self.enrolling && course.record_id().is_some(),
                                egui::Button::new(label),
                            );
                            if button.clicked() {
                                if let Some(course_id) = course.record_id() {
                                    action = Some(UiAction::Enroll {
                                        student_id: self.student_id.clone(),
                                        course_id: course_id.to_string(),
                                    });
                                }
                            }
                        });
                        ui.add_space(6.0);
                    }
                });
            }

            ui.add_space(10.0);
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    self.open = false;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        if action.is_some() {
            self.enrolling = true;
            self.error = None;
            self.success = None;
        }
        action
    }
}

impl Default for EnrollModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str) -> Course {
        Course {
            id: Some(id.to_string()),
            code: format!("{id}-code"),
            name: name.to_string(),
            description: String::new(),
            credits: 3,
            instructor: "Turing".to_string(),
            max_students: 30,
            enrolled_students: vec![],
        }
    }

    fn student(id: &str) -> Student {
        Student {
            id: Some(id.to_string()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: 20,
            grade: 3.5,
            courses: vec![],
        }
    }

    fn open_with_catalog() -> EnrollModal {
        let mut modal = EnrollModal::new();
        modal.open_for(&student("S1"), "S1");
        modal.set_catalog(Ok(vec![course("C1", "Algorithms"), course("C2", "Databases")]));
        modal
    }

    #[test]
    fn success_prunes_enrolled_course_and_signals_completion() {
        let mut modal = open_with_catalog();

        let completed = modal.handle_enrolled("S1", "C1", Ok(student("S1")));
        assert!(completed);
        assert_eq!(modal.available().len(), 1);
        assert_eq!(modal.available()[0].record_id(), Some("C2"));
        assert_eq!(modal.success(), Some("Successfully enrolled in Algorithms!"));
        assert_eq!(modal.error(), None);
    }

    #[test]
    fn server_detail_surfaces_verbatim_and_list_is_untouched() {
        let mut modal = open_with_catalog();

        let completed = modal.handle_enrolled(
            "S1",
            "C1",
            Err(ApiError::Rejected { status: 400, detail: Some("Course full".to_string()) }),
        );
        assert!(!completed);
        assert_eq!(modal.available().len(), 2);
        assert_eq!(modal.error(), Some("Course full"));
    }

    #[test]
    fn rejection_without_detail_uses_enroll_fallback() {
        let mut modal = open_with_catalog();

        modal.handle_enrolled("S1", "C2", Err(ApiError::Rejected { status: 500, detail: None }));
        assert_eq!(modal.error(), Some("Failed to enroll in course"));
    }

    #[test]
    fn unreachable_server_uses_fixed_message() {
        let mut modal = open_with_catalog();

        modal.handle_enrolled("S1", "C2", Err(ApiError::Unreachable));
        assert_eq!(modal.error(), Some("Could not reach the server. Please try again later."));
    }

    #[test]
    fn result_for_previous_student_is_ignored() {
        let mut modal = open_with_catalog();

        // Reopened for someone else before the first registration settled
        modal.open_for(&student("S2"), "S2");
        modal.set_catalog(Ok(vec![course("C1", "Algorithms"), course("C2", "Databases")]));

        let completed = modal.handle_enrolled("S1", "C1", Ok(student("S1")));
        assert!(!completed);
        assert_eq!(modal.available().len(), 2);
        assert_eq!(modal.success(), None);
        assert_eq!(modal.error(), None);
    }

    #[test]
    fn catalog_failure_is_reported() {
        let mut modal = EnrollModal::new();
        modal.open_for(&student("S1"), "S1");
        modal.set_catalog(Err(ApiError::Rejected {
            status: 503,
            detail: Some("down for maintenance".to_string()),
        }));

        assert_eq!(modal.error(), Some("Failed to fetch available courses: down for maintenance"));
        assert!(modal.available().is_empty());
    }
}
