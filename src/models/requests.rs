use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Answer;

/// Login credentials, taken from the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginQuery {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// Request to register a new account
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub username: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// Questionnaire submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitAssessmentRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Query for personalized recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationsQuery {
    pub limit: i64,
}

impl RecommendationsQuery {
    pub const DEFAULT_LIMIT: i64 = 6;

    /// Parse the raw `limit` parameter, falling back to the default when it
    /// is absent or not an integer
    pub fn from_raw(limit: Option<&str>) -> Self {
        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(Self::DEFAULT_LIMIT);
        Self { limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_all_fields() {
        let req = RegisterRequest {
            email: "a@b.c".to_string(),
            username: String::new(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_recommendations_limit_parsing() {
        assert_eq!(RecommendationsQuery::from_raw(None).limit, 6);
        assert_eq!(RecommendationsQuery::from_raw(Some("2")).limit, 2);
        assert_eq!(RecommendationsQuery::from_raw(Some("abc")).limit, 6);
        assert_eq!(RecommendationsQuery::from_raw(Some("-1")).limit, -1);
    }
}
