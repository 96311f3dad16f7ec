use actix_web::{http::{Method, StatusCode}, web, HttpRequest, HttpResponse};
use std::collections::HashMap;
use uuid::Uuid;
use crate::error::ApiError;
use crate::routes::dispatch::{route, RouteRequest, RouteResponse};

/// Largest request body the adapter will buffer
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Catch-all actix handler feeding every request through the router
pub async fn dispatch(req: HttpRequest, payload: web::Payload) -> HttpResponse {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("request", %request_id);

    let body = read_body(&req, payload).await;

    span.in_scope(|| {
        let response = match body.and_then(|body| to_route_request(&req, &body)) {
            Ok(route_request) => route(&route_request),
            Err(err) => {
                tracing::info!("Bad body on {} {}: {}", req.method(), req.path(), err);
                RouteResponse::from_error(&err)
            }
        };
        into_http_response(response)
    })
}

/// Buffer the payload up to `MAX_BODY_BYTES`
///
/// Failures come back as `ApiError` so they get the same JSON and CORS
/// treatment as every other response.
async fn read_body(req: &HttpRequest, payload: web::Payload) -> Result<web::Bytes, ApiError> {
    // Preflight never reads the body
    if req.method() == Method::OPTIONS {
        return Ok(web::Bytes::new());
    }

    match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => Err(ApiError::InvalidInput(format!("Failed to read request body: {}", e))),
        Err(_) => Err(ApiError::InvalidInput(format!(
            "Request body exceeds {} bytes",
            MAX_BODY_BYTES
        ))),
    }
}

/// Convert an actix request into a `RouteRequest`
pub fn to_route_request(req: &HttpRequest, body: &[u8]) -> Result<RouteRequest, ApiError> {
    let method = req.method().as_str().to_string();

    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();

    let headers = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect();

    // Preflight never reads the body
    let body = if body.is_empty() || method == "OPTIONS" {
        None
    } else {
        Some(
            serde_json::from_slice(body)
                .map_err(|e| ApiError::InvalidInput(format!("Invalid JSON body: {}", e)))?,
        )
    };

    Ok(RouteRequest {
        method,
        path: req.path().to_string(),
        query,
        headers,
        body,
    })
}

/// Write a `RouteResponse` out as an actix response
pub fn into_http_response(response: RouteResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }

    match response.body {
        Some(body) => builder.body(body.to_string()),
        None => builder.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_to_route_request_decodes_query_and_headers() {
        let req = TestRequest::post()
            .uri("/api/v1/users/login?email=alex%40example.com&password=password123")
            .insert_header(("Authorization", "Bearer demo_token_1_0"))
            .to_http_request();

        let route_request = to_route_request(&req, b"").unwrap();
        assert_eq!(route_request.method, "POST");
        assert_eq!(route_request.path, "/api/v1/users/login");
        assert_eq!(route_request.query_param("email"), Some("alex@example.com"));
        assert_eq!(route_request.bearer_token(), Some("demo_token_1_0"));
        assert!(route_request.body.is_none());
    }

    #[test]
    fn test_to_route_request_rejects_malformed_json() {
        let req = TestRequest::post().uri("/api/v1/assessment/submit").to_http_request();
        let err = to_route_request(&req, b"{not json").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_preflight_ignores_body() {
        let req = TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/anything")
            .to_http_request();
        assert!(to_route_request(&req, b"garbage").unwrap().body.is_none());
    }
}
