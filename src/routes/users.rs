use validator::Validate;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginQuery, RegisterRequest};
use crate::routes::dispatch::{RouteRequest, RouteResponse};
use crate::services::{accounts, TokenError};

/// Login endpoint
///
/// POST /api/v1/users/login?email={email}&password={password}
pub fn login(request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    let query = LoginQuery {
        email: request.query_param("email").unwrap_or_default().to_string(),
        password: request.query_param("password").unwrap_or_default().to_string(),
    };

    if query.validate().is_err() {
        return Err(ApiError::InvalidInput("Email and password are required".to_string()));
    }

    tracing::info!("Login attempt: {}", query.email);

    let user = accounts::authenticate(&query.email, &query.password)
        .ok_or_else(|| ApiError::Authentication("Invalid credentials".to_string()))?;

    let token = accounts::issue_token(user.id);
    RouteResponse::json(200, &AuthResponse::bearer(token, user))
}

/// Registration endpoint
///
/// POST /api/v1/users/register
///
/// Request body:
/// ```json
/// {
///   "email": "string",
///   "username": "string",
///   "password": "string"
/// }
/// ```
pub fn register(request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    let req: RegisterRequest = request.parse_body()?;

    if let Err(errors) = req.validate() {
        tracing::debug!("Registration validation failed: {}", errors);
        return Err(ApiError::InvalidInput(
            "Email, username, and password are required".to_string(),
        ));
    }

    tracing::info!("Registration attempt: {}", req.email);

    let user = accounts::registered_profile(&req.email, &req.username);
    let token = accounts::issue_token(user.id);
    RouteResponse::json(201, &AuthResponse::bearer(token, user))
}

/// Current user endpoint
///
/// GET /api/v1/users/me with `Authorization: Bearer <token>`
pub fn current_user(request: &RouteRequest) -> Result<RouteResponse, ApiError> {
    let token = request
        .bearer_token()
        .ok_or_else(|| ApiError::Authentication(TokenError::Malformed.to_string()))?;

    let user = accounts::verify_token(token).map_err(|e| ApiError::Authentication(e.to_string()))?;

    RouteResponse::json(200, &user)
}
