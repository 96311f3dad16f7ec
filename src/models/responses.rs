use serde::{Deserialize, Serialize};
use crate::models::domain::{ClassificationResult, LearningStyle, ScoreTally, UserProfile};

/// Response for login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

impl AuthResponse {
    pub fn bearer(access_token: String, user: UserProfile) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

/// Response for a scored questionnaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResultResponse {
    pub learning_style: LearningStyle,
    pub scores: ScoreTally,
    pub message: String,
}

impl From<ClassificationResult> for AssessmentResultResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            learning_style: result.dominant,
            scores: result.tally,
            message: result.message,
        }
    }
}

/// API check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub path: String,
    pub method: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
