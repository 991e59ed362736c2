pub mod app;
pub mod enroll;
pub mod forms;
pub mod lists;
pub mod settings_modal;
pub mod theme;
pub mod toast;
pub mod top_bar;
pub mod views;

pub use app::RegistraApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Students,
    Courses,
    Enrollments,
}

impl View {
    pub const ALL: [(View, &'static str); 4] = [
        (View::Dashboard, "Dashboard"),
        (View::Students, "Students"),
        (View::Courses, "Courses"),
        (View::Enrollments, "Enrollments"),
    ];
}

/// Deferred UI intents, collected while drawing a frame and executed once
/// drawing is done so view code never mutates app state mid-layout.
#[derive(Debug, Clone)]
pub enum UiAction {
    SwitchView(View),

    RefreshStudents,
    SubmitStudent,
    EditStudent(usize),
    DeleteStudent(Option<String>),
    ResetStudentForm,

    RefreshCourses,
    SubmitCourse,
    EditCourse(usize),
    DeleteCourse(Option<String>),
    ResetCourseForm,

    OpenEnroll(usize),
    Enroll { student_id: String, course_id: String },

    RefreshDashboard,
    RefreshRosters,
}
