use crate::error::ApiError;
use crate::models::HealthResponse;
use crate::routes::dispatch::{RouteRequest, RouteResponse};

/// API check endpoint
///
/// GET /api/v1/test
pub fn api_test(request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    RouteResponse::json(
        200,
        &HealthResponse {
            message: "API is working!".to_string(),
            path: request.path.clone(),
            method: request.method.clone(),
            timestamp: chrono::Utc::now(),
        },
    )
}
