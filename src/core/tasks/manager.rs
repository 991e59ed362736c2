use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::{
    DashboardStats,
    Service,
    TaskResult,
};
use crate::{
    api::{
        CourseApi,
        StudentApi,
    },
    core::{
        models::{
            CoursePayload,
            CourseRoster,
            StudentPayload,
        },
        ApiError,
    },
};

/// Owns the runtime every network call runs on. Each operation spawns a
/// thread that blocks on the async call and sends exactly one `TaskResult`
/// back over the channel; the GUI drains the channel every frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn fetch_students(&self, api: StudentApi, generation: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(api.list());
            let _ = sender.send(TaskResult::Students { generation, result });
        });
    }

    pub fn save_student(&self, api: StudentApi, target: Option<String>, payload: StudentPayload) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let created = target.is_none();
            let result = runtime.block_on(async {
                match &target {
                    Some(id) => api.update(id, &payload).await,
                    None => api.create(&payload).await,
                }
            });
            let _ = sender.send(TaskResult::StudentSaved { created, result });
        });
    }

    pub fn delete_student(&self, api: StudentApi, id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(api.delete(&id));
            let _ = sender.send(TaskResult::StudentDeleted(result));
        });
    }

    pub fn fetch_courses(&self, api: CourseApi, generation: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(api.list());
            let _ = sender.send(TaskResult::Courses { generation, result });
        });
    }

    pub fn save_course(&self, api: CourseApi, target: Option<String>, payload: CoursePayload) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let created = target.is_none();
            let result = runtime.block_on(async {
                match &target {
                    Some(id) => api.update(id, &payload).await,
                    None => api.create(&payload).await,
                }
            });
            let _ = sender.send(TaskResult::CourseSaved { created, result });
        });
    }

    pub fn delete_course(&self, api: CourseApi, id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(api.delete(&id));
            let _ = sender.send(TaskResult::CourseDeleted(result));
        });
    }

    /// Full catalog fetch for the enrollment dialog. "Available" is whatever
    /// the course list endpoint returns.
    pub fn fetch_catalog(&self, api: CourseApi) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(api.list());
            let _ = sender.send(TaskResult::Catalog(result));
        });
    }

    pub fn enroll(&self, api: StudentApi, student_id: String, course_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(api.register(&student_id, &course_id));
            let _ = sender.send(TaskResult::Enrolled { student_id, course_id, result });
        });
    }

    pub fn fetch_stats(&self, students: StudentApi, courses: CourseApi) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let (students, courses) = tokio::join!(students.list(), courses.list());
                Ok::<DashboardStats, ApiError>(DashboardStats {
                    total_students: students?.len(),
                    total_courses: courses?.len(),
                })
            });
            let _ = sender.send(TaskResult::Stats(result));
        });
    }

    /// Catalog plus the resolved record of every enrolled student. Any
    /// failed lookup fails the whole fetch, as one result.
    pub fn fetch_rosters(&self, courses: CourseApi, students: StudentApi, generation: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let catalog = courses.list().await?;
                let mut rosters = Vec::with_capacity(catalog.len());
                for course in catalog {
                    let mut members = Vec::with_capacity(course.enrolled_students.len());
                    for student_id in &course.enrolled_students {
                        members.push(students.get(student_id).await?);
                    }
                    rosters.push(CourseRoster { course, students: members });
                }
                Ok::<Vec<CourseRoster>, ApiError>(rosters)
            });
            let _ = sender.send(TaskResult::Rosters { generation, result });
        });
    }

    pub fn check_health(&self, students: StudentApi, courses: CourseApi) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let (students_up, courses_up) =
                runtime.block_on(async { tokio::join!(students.health(), courses.health()) });
            let _ = sender.send(TaskResult::Health {
                service: Service::Students,
                healthy: students_up,
            });
            let _ =
                sender.send(TaskResult::Health { service: Service::Courses, healthy: courses_up });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
