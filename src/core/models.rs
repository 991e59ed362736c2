use serde::{
    Deserialize,
    Serialize,
};

/// A student record as the student service returns it. Depending on the
/// backing store the identifier arrives as `id` or `_id`; both land in the
/// same field here and nothing above this layer ever looks at the raw keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub grade: f64,
    #[serde(default)]
    pub courses: Vec<String>,
}

impl Student {
    /// Canonical identifier accessor. `None` when the backend has not
    /// assigned one (or sent an empty string).
    pub fn record_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub credits: u32,
    pub instructor: String,
    pub max_students: u32,
    #[serde(default)]
    pub enrolled_students: Vec<String>,
}

impl Course {
    pub fn record_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

/// Write body for create/update. The services expect the full record with
/// numeric fields already numeric; coercion happens in the form layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub grade: f64,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CoursePayload {
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: u32,
    pub instructor: String,
    pub max_students: u32,
    pub enrolled_students: Vec<String>,
}

/// Client-side join for the enrollments view: one course plus the resolved
/// records of everyone enrolled in it.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRoster {
    pub course: Course,
    pub students: Vec<Student>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_deserializes_mongo_style_id() {
        let student: Student = serde_json::from_str(
            r#"{"_id": "abc123", "first_name": "Ada", "last_name": "Lovelace",
                "email": "ada@example.com", "age": 20, "grade": 3.5}"#,
        )
        .unwrap();
        assert_eq!(student.record_id(), Some("abc123"));
        assert!(student.courses.is_empty());
    }

    #[test]
    fn student_deserializes_plain_id() {
        let student: Student = serde_json::from_str(
            r#"{"id": "abc123", "first_name": "Ada", "last_name": "Lovelace",
                "email": "ada@example.com", "age": 20, "grade": 3.5, "courses": ["c1"]}"#,
        )
        .unwrap();
        assert_eq!(student.record_id(), Some("abc123"));
        assert_eq!(student.courses, vec!["c1".to_string()]);
    }

    #[test]
    fn serialization_emits_canonical_id_key() {
        let student = Student {
            id: Some("abc123".to_string()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: 20,
            grade: 3.5,
            courses: vec![],
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["id"], "abc123");
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn missing_id_is_not_resolvable() {
        let course: Course = serde_json::from_str(
            r#"{"code": "CS101", "name": "Intro", "credits": 3,
                "instructor": "Turing", "max_students": 30}"#,
        )
        .unwrap();
        assert_eq!(course.record_id(), None);

        let blank = Course { id: Some("  ".to_string()), ..course };
        assert_eq!(blank.record_id(), None);
    }
}
