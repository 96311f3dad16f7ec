// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Answer, AssessmentQuestion, ClassificationResult, ContentItem, DashboardOverview,
    FormatUsage, LearningStyle, ScoreTally, UnknownStyle, UserProfile,
};
pub use requests::{LoginQuery, RecommendationsQuery, RegisterRequest, SubmitAssessmentRequest};
pub use responses::{AssessmentResultResponse, AuthResponse, HealthResponse};
