use crate::error::ApiError;
use crate::models::RecommendationsQuery;
use crate::routes::dispatch::{RouteRequest, RouteResponse};
use crate::services::catalog;

/// Personalized recommendations endpoint
///
/// GET /api/v1/content/recommendations/personalized?limit={limit}
///
/// Every caller gets the same leading slice of the catalog.
pub fn recommendations(request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    let query = RecommendationsQuery::from_raw(request.query_param("limit"));
    let items = catalog::recommendations(query.limit);

    tracing::debug!("Returning {} recommendations (limit {})", items.len(), query.limit);

    RouteResponse::json(200, &items)
}

/// GET /api/v1/content/{id}
pub fn detail(id: u32) -> Result<RouteResponse, ApiError> {
    let item = catalog::find_content(id)
        .ok_or_else(|| ApiError::NotFound("Content not found".to_string()))?;
    RouteResponse::json(200, &item)
}

/// GET /api/v1/analytics/dashboard/overview
pub fn dashboard_overview(_request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    RouteResponse::json(200, &catalog::dashboard_overview())
}
