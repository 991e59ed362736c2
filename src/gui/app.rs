use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::{
    enroll::EnrollModal,
    lists::{
        resolve_id,
        ListState,
    },
    settings_modal::SettingsModal,
    theme::Theme,
    toast::ToastOverlay,
    top_bar::TopBar,
    views::{
        self,
        courses::CoursesView,
        dashboard::DashboardView,
        students::StudentsView,
    },
    UiAction,
    View,
};
use crate::{
    api::{
        build_client,
        CourseApi,
        StudentApi,
    },
    core::{
        settings::SETTINGS_FILE,
        tasks::{
            Service,
            TaskManager,
            TaskResult,
        },
        CourseRoster,
        Settings,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(20);

pub struct RegistraApp {
    pub settings: Settings,
    pub theme: Theme,
    pub view: View,

    pub students: StudentsView,
    pub courses: CoursesView,
    pub dashboard: DashboardView,
    pub rosters: ListState<CourseRoster>,

    pub enroll: EnrollModal,
    pub settings_modal: SettingsModal,
    pub toasts: ToastOverlay,

    pub student_service_up: Option<bool>,
    pub course_service_up: Option<bool>,
    last_health_check: Option<Instant>,

    http: reqwest::Client,
    student_api: StudentApi,
    course_api: CourseApi,
    task_manager: TaskManager,
}

impl RegistraApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<Settings>(SETTINGS_FILE);
        println!("Student service: {}", settings.student_service_url);
        println!("Course service: {}", settings.course_service_url);

        let http = match build_client() {
            Ok(client) => client,
            Err(e) => {
                eprintln!("{}. Falling back to a default client.", e);
                reqwest::Client::new()
            }
        };
        let student_api = StudentApi::new(http.clone(), &settings.student_service_url);
        let course_api = CourseApi::new(http.clone(), &settings.course_service_url);

        let mut app = Self {
            settings,
            theme: Theme::tokyo(),
            view: View::Dashboard,
            students: StudentsView::default(),
            courses: CoursesView::default(),
            dashboard: DashboardView::default(),
            rosters: ListState::new(),
            enroll: EnrollModal::new(),
            settings_modal: SettingsModal::new(),
            toasts: ToastOverlay::new(),
            student_service_up: None,
            course_service_up: None,
            last_health_check: None,
            http,
            student_api,
            course_api,
            task_manager: TaskManager::new(),
        };

        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.1);

        app.refresh_dashboard();
        app.refresh_students();
        app.refresh_courses();

        app
    }

    fn refresh_students(&mut self) {
        if let Some(generation) = self.students.list.begin_refresh() {
            self.task_manager.fetch_students(self.student_api.clone(), generation);
        }
    }

    /// Unconditional re-fetch after a confirmed mutation.
    fn force_refresh_students(&mut self) {
        let generation = self.students.list.force_refresh();
        self.task_manager.fetch_students(self.student_api.clone(), generation);
    }

    fn refresh_courses(&mut self) {
        if let Some(generation) = self.courses.list.begin_refresh() {
            self.task_manager.fetch_courses(self.course_api.clone(), generation);
        }
    }

    fn force_refresh_courses(&mut self) {
        let generation = self.courses.list.force_refresh();
        self.task_manager.fetch_courses(self.course_api.clone(), generation);
    }

    fn refresh_dashboard(&mut self) {
        if self.dashboard.loading {
            return;
        }
        self.dashboard.loading = true;
        self.task_manager.fetch_stats(self.student_api.clone(), self.course_api.clone());
    }

    fn refresh_rosters(&mut self) {
        if let Some(generation) = self.rosters.begin_refresh() {
            self.task_manager.fetch_rosters(
                self.course_api.clone(),
                self.student_api.clone(),
                generation,
            );
        }
    }

    fn switch_view(&mut self, view: View) {
        self.view = view;
        match view {
            View::Dashboard => self.refresh_dashboard(),
            View::Students => self.refresh_students(),
            View::Courses => self.refresh_courses(),
            View::Enrollments => self.refresh_rosters(),
        }
    }

    fn submit_student(&mut self) {
        match self.students.form.payload() {
            Ok(payload) => {
                self.students.busy = true;
                let target = self.students.form.target_id().map(str::to_string);
                self.task_manager.save_student(self.student_api.clone(), target, payload);
            }
            Err(error) => self.toasts.error(error.to_string()),
        }
    }

    fn delete_student(&mut self, id: Option<String>) {
        match resolve_id(id.as_deref()) {
            Ok(id) => {
                self.students.busy = true;
                self.task_manager.delete_student(self.student_api.clone(), id.to_string());
            }
            Err(error) => self.toasts.error(error.to_string()),
        }
    }

    fn submit_course(&mut self) {
        match self.courses.form.payload() {
            Ok(payload) => {
                self.courses.busy = true;
                let target = self.courses.form.target_id().map(str::to_string);
                self.task_manager.save_course(self.course_api.clone(), target, payload);
            }
            Err(error) => self.toasts.error(error.to_string()),
        }
    }

    fn delete_course(&mut self, id: Option<String>) {
        match resolve_id(id.as_deref()) {
            Ok(id) => {
                self.courses.busy = true;
                self.task_manager.delete_course(self.course_api.clone(), id.to_string());
            }
            Err(error) => self.toasts.error(error.to_string()),
        }
    }

    fn open_enroll(&mut self, index: usize) {
        let Some(student) = self.students.list.items().get(index).cloned() else {
            return;
        };
        match resolve_id(student.record_id()) {
            Ok(id) => {
                let id = id.to_string();
                self.enroll.open_for(&student, &id);
                self.task_manager.fetch_catalog(self.course_api.clone());
            }
            Err(error) => self.toasts.error(error.to_string()),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Students { generation, result } => {
                self.students.list.finish(generation, result);
            }
            TaskResult::StudentSaved { created, result } => {
                self.students.busy = false;
                match result {
                    Ok(_) => {
                        self.toasts.success(if created {
                            "Student added"
                        } else {
                            "Student updated"
                        });
                        self.students.form.reset();
                        self.force_refresh_students();
                    }
                    Err(error) => {
                        self.toasts.error(error.user_message("Failed to save student"))
                    }
                }
            }
            TaskResult::StudentDeleted(result) => {
                self.students.busy = false;
                match result {
                    Ok(()) => {
                        self.toasts.success("Student deleted");
                        self.force_refresh_students();
                    }
                    Err(error) => {
                        self.toasts.error(error.user_message("Failed to delete student"))
                    }
                }
            }
            TaskResult::Courses { generation, result } => {
                self.courses.list.finish(generation, result);
            }
            TaskResult::CourseSaved { created, result } => {
                self.courses.busy = false;
                match result {
                    Ok(_) => {
                        self.toasts
                            .success(if created { "Course added" } else { "Course updated" });
                        self.courses.form.reset();
                        self.force_refresh_courses();
                    }
                    Err(error) => self.toasts.error(error.user_message("Failed to save course")),
                }
            }
            TaskResult::CourseDeleted(result) => {
                self.courses.busy = false;
                match result {
                    Ok(()) => {
                        self.toasts.success("Course deleted");
                        self.force_refresh_courses();
                    }
                    Err(error) => {
                        self.toasts.error(error.user_message("Failed to delete course"))
                    }
                }
            }
            TaskResult::Catalog(result) => self.enroll.set_catalog(result),
            TaskResult::Enrolled { student_id, course_id, result } => {
                let confirmed = result.is_ok();
                self.enroll.handle_enrolled(&student_id, &course_id, result);
                // The server registered on both resources; re-fetch both
                if confirmed {
                    self.force_refresh_students();
                    self.force_refresh_courses();
                }
            }
            TaskResult::Stats(result) => {
                self.dashboard.loading = false;
                match result {
                    Ok(stats) => {
                        self.dashboard.stats = Some(stats);
                        self.dashboard.error = None;
                    }
                    Err(error) => {
                        self.dashboard.error =
                            Some(error.user_message("Failed to load dashboard stats"))
                    }
                }
            }
            TaskResult::Rosters { generation, result } => {
                self.rosters.finish(generation, result);
            }
            TaskResult::Health { service, healthy } => match service {
                Service::Students => self.student_service_up = Some(healthy),
                Service::Courses => self.course_service_up = Some(healthy),
            },
        }
    }

    fn execute_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::SwitchView(view) => self.switch_view(view),

                UiAction::RefreshStudents => self.refresh_students(),
                UiAction::SubmitStudent => self.submit_student(),
                UiAction::EditStudent(index) => {
                    if let Some(student) = self.students.list.items().get(index).cloned() {
                        if let Err(error) = self.students.form.load_for_edit(&student) {
                            self.toasts.error(error.to_string());
                        }
                    }
                }
                UiAction::DeleteStudent(id) => self.delete_student(id),
                UiAction::ResetStudentForm => self.students.form.reset(),

                UiAction::RefreshCourses => self.refresh_courses(),
                UiAction::SubmitCourse => self.submit_course(),
                UiAction::EditCourse(index) => {
                    if let Some(course) = self.courses.list.items().get(index).cloned() {
                        if let Err(error) = self.courses.form.load_for_edit(&course) {
                            self.toasts.error(error.to_string());
                        }
                    }
                }
                UiAction::DeleteCourse(id) => self.delete_course(id),
                UiAction::ResetCourseForm => self.courses.form.reset(),

                UiAction::OpenEnroll(index) => self.open_enroll(index),
                UiAction::Enroll { student_id, course_id } => {
                    self.task_manager.enroll(self.student_api.clone(), student_id, course_id);
                }

                UiAction::RefreshDashboard => self.refresh_dashboard(),
                UiAction::RefreshRosters => self.refresh_rosters(),
            }
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        if let Err(e) = save_json(&settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }

        self.settings = settings;
        self.student_api =
            StudentApi::new(self.http.clone(), &self.settings.student_service_url);
        self.course_api = CourseApi::new(self.http.clone(), &self.settings.course_service_url);

        self.student_service_up = None;
        self.course_service_up = None;
        self.last_health_check = None;

        self.toasts.success("Settings saved");
        self.switch_view(self.view);
    }

    fn update_health(&mut self) {
        let due = self
            .last_health_check
            .is_none_or(|checked| checked.elapsed() >= HEALTH_CHECK_INTERVAL);
        if due {
            self.last_health_check = Some(Instant::now());
            self.task_manager.check_health(self.student_api.clone(), self.course_api.clone());
        }
    }

    fn has_pending_work(&self) -> bool {
        self.students.busy
            || self.courses.busy
            || self.students.list.is_loading()
            || self.courses.list.is_loading()
            || self.rosters.is_loading()
            || self.dashboard.loading
            || self.enroll.is_busy()
            || self.toasts.is_visible()
    }
}

impl eframe::App for RegistraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();
        for result in task_results {
            self.handle_task_result(result);
        }

        self.update_health();

        let mut actions: Vec<UiAction> = Vec::new();

        if let Some(view) = TopBar::show(
            ctx,
            self.view,
            &mut self.settings_modal,
            &self.settings,
            self.student_service_up,
            self.course_service_up,
        ) {
            actions.push(UiAction::SwitchView(view));
        }

        match self.view {
            View::Dashboard => views::dashboard::show(ctx, self, &mut actions),
            View::Students => views::students::show(ctx, self, &mut actions),
            View::Courses => views::courses::show(ctx, self, &mut actions),
            View::Enrollments => views::enrollments::show(ctx, self, &mut actions),
        }

        if let Some(action) = self.enroll.show(ctx, &self.theme) {
            actions.push(action);
        }

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.apply_settings(settings);
        }

        self.toasts.show(ctx, &self.theme);

        let had_actions = !actions.is_empty();
        self.execute_actions(actions);

        if had_actions {
            ctx.request_repaint();
        } else if self.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        ApiError,
        Student,
    };

    // Points at a closed port; the spawned fetch tasks fail fast and their
    // results are never polled here.
    const UNROUTABLE: &str = "http://127.0.0.1:1";

    fn test_app() -> RegistraApp {
        let http = reqwest::Client::new();
        RegistraApp {
            settings: Settings {
                student_service_url: UNROUTABLE.to_string(),
                course_service_url: UNROUTABLE.to_string(),
            },
            theme: Theme::tokyo(),
            view: View::Dashboard,
            students: StudentsView::default(),
            courses: CoursesView::default(),
            dashboard: DashboardView::default(),
            rosters: ListState::new(),
            enroll: EnrollModal::new(),
            settings_modal: SettingsModal::new(),
            toasts: ToastOverlay::new(),
            student_service_up: None,
            course_service_up: None,
            last_health_check: None,
            student_api: StudentApi::new(http.clone(), UNROUTABLE),
            course_api: CourseApi::new(http.clone(), UNROUTABLE),
            http,
            task_manager: TaskManager::new(),
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

    #[test]
    fn confirmed_enrollment_refreshes_both_collections() {
        let mut app = test_app();

        app.handle_task_result(TaskResult::Enrolled {
            student_id: "S1".to_string(),
            course_id: "C1".to_string(),
            result: Ok(student("S1")),
        });

        assert!(app.students.list.is_loading());
        assert!(app.courses.list.is_loading());
    }

    #[test]
    fn failed_enrollment_refreshes_nothing() {
        let mut app = test_app();

        app.handle_task_result(TaskResult::Enrolled {
            student_id: "S1".to_string(),
            course_id: "C1".to_string(),
            result: Err(ApiError::Unreachable),
        });

        assert!(!app.students.list.is_loading());
        assert!(!app.courses.list.is_loading());
    }
}
