use thiserror::Error;
use crate::core::ClassifyError;

/// Failures raised while handling a routed request
///
/// Every variant maps to one HTTP status; the router turns them into a
/// `{detail}` body and never lets them escape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidInput(_) => 400,
            ApiError::Authentication(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidInput("x".into()).status_code(), 400);
        assert_eq!(ApiError::Authentication("x".into()).status_code(), 401);
        assert_eq!(ApiError::NotFound("x".into()).status_code(), 404);
        assert_eq!(ApiError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_internal_detail_prefix() {
        let err = ApiError::Internal("boom".into());
        assert_eq!(err.to_string(), "Internal server error: boom");
    }

    #[test]
    fn test_classify_error_maps_to_bad_request() {
        let err = ApiError::from(ClassifyError::EmptyAnswers);
        assert_eq!(err, ApiError::InvalidInput("Answers are required".into()));
    }
}
