use thiserror::Error;

/// One classified failure per resolved call, decided at the point the
/// request settles: rejected by the server, never reached it, could not be
/// built/decoded, or stopped locally before any network was involved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{}", rejection_text(.status, .detail))]
    Rejected { status: u16, detail: Option<String> },

    #[error("Could not reach the server. Please try again later.")]
    Unreachable,

    #[error("Error: {0}")]
    Invalid(String),

    #[error("{0}")]
    Validation(String),
}

fn rejection_text(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("Server error: HTTP {status}"),
    }
}

impl ApiError {
    /// User-facing message with an operation-specific fallback for
    /// rejections that carry no detail payload.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { detail: Some(detail), .. } => detail.clone(),
            ApiError::Rejected { detail: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_detail_is_surfaced_verbatim() {
        let err = ApiError::Rejected { status: 400, detail: Some("Course full".to_string()) };
        assert_eq!(err.to_string(), "Course full");
        assert_eq!(err.user_message("Failed to enroll in course"), "Course full");
    }

    #[test]
    fn rejection_without_detail_falls_back() {
        let err = ApiError::Rejected { status: 503, detail: None };
        assert_eq!(err.to_string(), "Server error: HTTP 503");
        assert_eq!(err.user_message("Failed to enroll in course"), "Failed to enroll in course");
    }

    #[test]
    fn unreachable_uses_fixed_message() {
        assert_eq!(
            ApiError::Unreachable.to_string(),
            "Could not reach the server. Please try again later."
        );
    }

    #[test]
    fn validation_message_passes_through() {
        let err = ApiError::Validation("Grade must be between 0 and 4".to_string());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Grade must be between 0 and 4");
    }
}
