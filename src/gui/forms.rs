use crate::{
    core::{
        models::{
            CoursePayload,
            StudentPayload,
        },
        ApiError,
        Course,
        Student,
    },
    gui::lists::resolve_id,
};

/// A draft is either a fresh record or bound to exactly one existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// String-typed working copy of a student record. Everything stays a string
/// at the input layer; coercion and bounds checks happen once, in
/// `payload()`, before any network call.
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub grade: String,
    // Enrollments ride along untouched so an edit does not wipe them
    courses: Vec<String>,
    mode: FormMode,
}

impl StudentForm {
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            age: String::new(),
            grade: String::new(),
            courses: Vec::new(),
            mode: FormMode::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn target_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    /// Copy an entity into the draft and bind its id. Refuses (and leaves
    /// the draft untouched) when the entity has no resolvable id.
    pub fn load_for_edit(&mut self, student: &Student) -> Result<(), ApiError> {
        let id = resolve_id(student.record_id())?.to_string();

        self.first_name = student.first_name.clone();
        self.last_name = student.last_name.clone();
        self.email = student.email.clone();
        self.age = student.age.to_string();
        self.grade = student.grade.to_string();
        self.courses = student.courses.clone();
        self.mode = FormMode::Edit(id);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn payload(&self) -> Result<StudentPayload, ApiError> {
        Ok(StudentPayload {
            first_name: required("First name", &self.first_name)?,
            last_name: required("Last name", &self.last_name)?,
            email: parse_email(&self.email)?,
            age: parse_count("Age", &self.age, 1)?,
            grade: parse_grade(&self.grade)?,
            courses: self.courses.clone(),
        })
    }
}

impl Default for StudentForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CourseForm {
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: String,
    pub instructor: String,
    pub max_students: String,
    enrolled_students: Vec<String>,
    mode: FormMode,
}

impl CourseForm {
    pub fn new() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            description: String::new(),
            credits: String::new(),
            instructor: String::new(),
            max_students: String::new(),
            enrolled_students: Vec::new(),
            mode: FormMode::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn target_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn load_for_edit(&mut self, course: &Course) -> Result<(), ApiError> {
        let id = resolve_id(course.record_id())?.to_string();

        self.code = course.code.clone();
        self.name = course.name.clone();
        self.description = course.description.clone();
        self.credits = course.credits.to_string();
        self.instructor = course.instructor.clone();
        self.max_students = course.max_students.to_string();
        self.enrolled_students = course.enrolled_students.clone();
        self.mode = FormMode::Edit(id);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn payload(&self) -> Result<CoursePayload, ApiError> {
        Ok(CoursePayload {
            code: required("Course code", &self.code)?,
            name: required("Course name", &self.name)?,
            description: self.description.trim().to_string(),
            credits: parse_count("Credits", &self.credits, 1)?,
            instructor: required("Instructor", &self.instructor)?,
            max_students: parse_count("Max students", &self.max_students, 1)?,
            enrolled_students: self.enrolled_students.clone(),
        })
    }
}

impl Default for CourseForm {
    fn default() -> Self {
        Self::new()
    }
}

fn required(label: &str, value: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{label} is required")));
    }
    Ok(value.to_string())
}

fn parse_email(value: &str) -> Result<String, ApiError> {
    let value = required("Email", value)?;
    match value.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(value),
        _ => Err(ApiError::Validation("Email is not a valid address".to_string())),
    }
}

/// Strict base-10 integer with a lower bound.
fn parse_count(label: &str, value: &str, min: u32) -> Result<u32, ApiError> {
    let value = required(label, value)?;
    let parsed = value
        .parse::<u32>()
        .map_err(|_| ApiError::Validation(format!("{label} must be a whole number")))?;
    if parsed < min {
        return Err(ApiError::Validation(format!("{label} must be at least {min}")));
    }
    Ok(parsed)
}

/// Grade is bounded by the service model; re-checked here so bad values
/// never leave the client.
fn parse_grade(value: &str) -> Result<f64, ApiError> {
    let value = required("Grade", value)?;
    let parsed = value
        .parse::<f64>()
        .map_err(|_| ApiError::Validation("Grade must be a number".to_string()))?;
    if !parsed.is_finite() || !(0.0..=4.0).contains(&parsed) {
        return Err(ApiError::Validation("Grade must be between 0 and 4".to_string()));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        Student {
            id: Some("S1".to_string()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: 20,
            grade: 3.5,
            courses: vec!["C1".to_string()],
        }
    }

    #[test]
    fn submit_coerces_numeric_fields() {
        let form = StudentForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: "20".to_string(),
            grade: "3.5".to_string(),
            ..StudentForm::new()
        };

        let payload = form.payload().unwrap();
        assert_eq!(payload.age, 20);
        assert_eq!(payload.grade, 3.5);
        assert!(payload.courses.is_empty());
    }

    #[test]
    fn non_numeric_grade_is_rejected_locally() {
        let mut form = StudentForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: "20".to_string(),
            grade: "abc".to_string(),
            ..StudentForm::new()
        };
        assert_eq!(
            form.payload().unwrap_err(),
            ApiError::Validation("Grade must be a number".to_string())
        );

        form.grade = "4.5".to_string();
        assert_eq!(
            form.payload().unwrap_err(),
            ApiError::Validation("Grade must be between 0 and 4".to_string())
        );
    }

    #[test]
    fn age_below_bound_is_rejected() {
        let form = StudentForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: "0".to_string(),
            grade: "3.5".to_string(),
            ..StudentForm::new()
        };
        assert!(form.payload().unwrap_err().is_validation());
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let form = StudentForm {
            first_name: "  ".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: "20".to_string(),
            grade: "3.5".to_string(),
            ..StudentForm::new()
        };
        assert_eq!(
            form.payload().unwrap_err(),
            ApiError::Validation("First name is required".to_string())
        );
    }

    #[test]
    fn bad_email_is_rejected() {
        let form = StudentForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "not-an-address".to_string(),
            age: "20".to_string(),
            grade: "3.5".to_string(),
            ..StudentForm::new()
        };
        assert!(form.payload().unwrap_err().is_validation());
    }

    #[test]
    fn load_for_edit_binds_id_and_stringifies_fields() {
        let mut form = StudentForm::new();
        form.load_for_edit(&sample_student()).unwrap();

        assert!(form.is_editing());
        assert_eq!(form.target_id(), Some("S1"));
        assert_eq!(form.age, "20");
        assert_eq!(form.grade, "3.5");

        // Carried enrollments survive the round trip
        let payload = form.payload().unwrap();
        assert_eq!(payload.courses, vec!["C1".to_string()]);
    }

    #[test]
    fn load_for_edit_without_id_fails_and_keeps_mode() {
        let mut student = sample_student();
        student.id = None;

        let mut form = StudentForm::new();
        assert!(form.load_for_edit(&student).unwrap_err().is_validation());
        assert!(!form.is_editing());
        assert!(form.first_name.is_empty());
    }

    #[test]
    fn reset_clears_draft_and_unbinds() {
        let mut form = StudentForm::new();
        form.load_for_edit(&sample_student()).unwrap();
        form.reset();

        assert!(!form.is_editing());
        assert_eq!(form.target_id(), None);
        assert!(form.first_name.is_empty());
        assert!(form.grade.is_empty());
    }

    #[test]
    fn course_form_coerces_and_validates() {
        let mut form = CourseForm {
            code: "CS101".to_string(),
            name: "Intro".to_string(),
            description: String::new(),
            credits: "3".to_string(),
            instructor: "Turing".to_string(),
            max_students: "30".to_string(),
            ..CourseForm::new()
        };

        let payload = form.payload().unwrap();
        assert_eq!(payload.credits, 3);
        assert_eq!(payload.max_students, 30);

        form.max_students = "0".to_string();
        assert_eq!(
            form.payload().unwrap_err(),
            ApiError::Validation("Max students must be at least 1".to_string())
        );
    }
}
