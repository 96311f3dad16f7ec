//! IAEF API - mock backend for the learning-style assessment app
//!
//! This library provides the learning-style classifier and the endpoint
//! router that serves the app's canned JSON responses.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify, ClassifyError};
pub use error::ApiError;
pub use models::{Answer, ClassificationResult, LearningStyle, ScoreTally};
pub use routes::{route, Route, RouteRequest, RouteResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let result = classify(&[Answer::new(1, "visual")]).unwrap();
        assert_eq!(result.dominant, LearningStyle::Visual);
    }
}
