use crate::core::{
    models::{
        Course,
        CourseRoster,
        Student,
    },
    ApiError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Students,
    Courses,
}

impl Service {
    pub fn label(&self) -> &'static str {
        match self {
            Service::Students => "Student Service",
            Service::Courses => "Course Service",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_courses: usize,
}

/// One message per finished background operation, drained on the GUI thread
/// each frame. List results carry the refresh generation they were started
/// with so stale responses can be dropped.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Students { generation: u64, result: Result<Vec<Student>, ApiError> },
    StudentSaved { created: bool, result: Result<Student, ApiError> },
    StudentDeleted(Result<(), ApiError>),

    Courses { generation: u64, result: Result<Vec<Course>, ApiError> },
    CourseSaved { created: bool, result: Result<Course, ApiError> },
    CourseDeleted(Result<(), ApiError>),

    Catalog(Result<Vec<Course>, ApiError>),
    Enrolled { student_id: String, course_id: String, result: Result<Student, ApiError> },

    Stats(Result<DashboardStats, ApiError>),
    Rosters { generation: u64, result: Result<Vec<CourseRoster>, ApiError> },

    Health { service: Service, healthy: bool },
}
