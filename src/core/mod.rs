pub mod errors;
pub mod models;
pub mod settings;
pub mod tasks;

pub use errors::ApiError;
pub use models::{
    Course,
    CourseRoster,
    Student,
};
pub use settings::Settings;
