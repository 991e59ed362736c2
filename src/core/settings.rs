use serde::{
    Deserialize,
    Serialize,
};

/// Environment variable overriding the student service base URL.
pub const STUDENT_URL_ENV: &str = "STUDENT_SERVICE_URL";
/// Environment variable overriding the course service base URL.
pub const COURSE_URL_ENV: &str = "COURSE_SERVICE_URL";

pub const DEFAULT_STUDENT_URL: &str = "http://localhost:8000";
pub const DEFAULT_COURSE_URL: &str = "http://localhost:8001";

/// Settings file name inside the app data dir.
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub student_service_url: String,
    pub course_service_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            student_service_url: env_or(STUDENT_URL_ENV, DEFAULT_STUDENT_URL),
            course_service_url: env_or(COURSE_URL_ENV, DEFAULT_COURSE_URL),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // Save current env var state
        let student = std::env::var_os(STUDENT_URL_ENV);
        let course = std::env::var_os(COURSE_URL_ENV);

        std::env::remove_var(STUDENT_URL_ENV);
        std::env::remove_var(COURSE_URL_ENV);
        let settings = Settings::default();
        assert_eq!(settings.student_service_url, DEFAULT_STUDENT_URL);
        assert_eq!(settings.course_service_url, DEFAULT_COURSE_URL);

        // Restore original state
        if let Some(val) = student {
            std::env::set_var(STUDENT_URL_ENV, val);
        }
        if let Some(val) = course {
            std::env::set_var(COURSE_URL_ENV, val);
        }
    }

    #[test]
    fn env_or_prefers_non_empty_value() {
        let var = "REGISTRA_SETTINGS_TEST_VAR";
        std::env::set_var(var, "http://svc:9000");
        assert_eq!(env_or(var, "http://fallback"), "http://svc:9000");

        std::env::set_var(var, "  ");
        assert_eq!(env_or(var, "http://fallback"), "http://fallback");

        std::env::remove_var(var);
        assert_eq!(env_or(var, "http://fallback"), "http://fallback");
    }
}
