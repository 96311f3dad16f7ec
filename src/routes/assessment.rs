use validator::Validate;
use crate::core::{classify, ClassifyError};
use crate::error::ApiError;
use crate::models::{AssessmentResultResponse, SubmitAssessmentRequest};
use crate::routes::dispatch::{RouteRequest, RouteResponse};
use crate::services::assessment_questions;

/// Questionnaire endpoint
///
/// GET /api/v1/assessment/questions
pub fn questions(_request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    RouteResponse::json(200, &assessment_questions())
}

/// Questionnaire submission endpoint
///
/// POST /api/v1/assessment/submit
///
/// Request body:
/// ```json
/// {
///   "answers": [{ "question_id": 1, "answer": "visual|auditory|kinesthetic" }]
/// }
/// ```
pub fn submit(request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    let req: SubmitAssessmentRequest = request.parse_body()?;

    if req.validate().is_err() {
        return Err(ClassifyError::EmptyAnswers.into());
    }

    let result = classify(&req.answers)?;

    tracing::info!(
        "Assessment scored {:?} from {} answers -> {}",
        result.tally,
        req.answers.len(),
        result.dominant
    );

    RouteResponse::json(200, &AssessmentResultResponse::from(result))
}
