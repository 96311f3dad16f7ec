use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use crate::error::ApiError;
use crate::routes::{assessment, content, health, users};

/// One inbound request, independent of the HTTP server
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    /// Header names are stored lower-cased
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

impl RouteRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Attach a bearer credential to this request only
    pub fn with_bearer(self, token: &str) -> Self {
        self.with_header("authorization", format!("Bearer {}", token))
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Token from an `Authorization: Bearer <token>` header
    pub fn bearer_token(&self) -> Option<&str> {
        self.header("authorization")?.strip_prefix("Bearer ")
    }

    /// Deserialize the body into a closed request type
    ///
    /// A missing body reads as `{}`, so required fields surface as
    /// validation failures rather than shape errors. Anything other than an
    /// object is rejected, since derived structs would otherwise accept a
    /// positional array.
    pub fn parse_body<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let body = match &self.body {
            None => json!({}),
            Some(body @ Value::Object(_)) => body.clone(),
            Some(_) => {
                return Err(ApiError::InvalidInput(
                    "Invalid request body: expected a JSON object".to_string(),
                ))
            }
        };
        serde_json::from_value(body)
            .map_err(|e| ApiError::InvalidInput(format!("Invalid request body: {}", e)))
    }
}

/// Status, headers and JSON body produced for a request
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// `None` means an empty body
    pub body: Option<Value>,
}

impl RouteResponse {
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, ApiError> {
        Ok(Self {
            status_code,
            headers: default_headers(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            headers: default_headers(),
            body: None,
        }
    }

    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status_code: err.status_code(),
            headers: default_headers(),
            body: Some(json!({ "detail": err.to_string() })),
        }
    }

    /// 404 for an unmatched route, listing every known endpoint
    pub fn not_found(method: &str, path: &str) -> Self {
        Self {
            status_code: 404,
            headers: default_headers(),
            body: Some(json!({
                "detail": format!("Endpoint not found: {} {}", method, path),
                "available_endpoints": Route::listing(),
            })),
        }
    }
}

/// JSON content type plus permissive CORS headers
pub fn default_headers() -> BTreeMap<String, String> {
    [
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
        ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
        ("Content-Type", "application/json"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

const CONTENT_PREFIX: &str = "/api/v1/content/";

/// Every endpoint the router serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ApiTest,
    Login,
    Register,
    CurrentUser,
    DashboardOverview,
    AssessmentQuestions,
    AssessmentSubmit,
    Recommendations,
    ContentDetail(u32),
}

impl Route {
    /// Listing order of the route table
    pub const TABLE: [Route; 9] = [
        Route::ApiTest,
        Route::Login,
        Route::Register,
        Route::CurrentUser,
        Route::DashboardOverview,
        Route::AssessmentQuestions,
        Route::AssessmentSubmit,
        Route::Recommendations,
        Route::ContentDetail(0),
    ];

    /// Method and path pattern for this route
    pub fn endpoint(&self) -> (&'static str, &'static str) {
        match self {
            Route::ApiTest => ("GET", "/api/v1/test"),
            Route::Login => ("POST", "/api/v1/users/login"),
            Route::Register => ("POST", "/api/v1/users/register"),
            Route::CurrentUser => ("GET", "/api/v1/users/me"),
            Route::DashboardOverview => ("GET", "/api/v1/analytics/dashboard/overview"),
            Route::AssessmentQuestions => ("GET", "/api/v1/assessment/questions"),
            Route::AssessmentSubmit => ("POST", "/api/v1/assessment/submit"),
            Route::Recommendations => ("GET", "/api/v1/content/recommendations/personalized"),
            Route::ContentDetail(_) => ("GET", "/api/v1/content/{id}"),
        }
    }

    /// Resolve a request line to a route
    ///
    /// Fixed paths match exactly and win over the `{id}` pattern.
    pub fn resolve(method: &str, path: &str) -> Option<Route> {
        let fixed = Self::TABLE
            .into_iter()
            .filter(|route| !matches!(route, Route::ContentDetail(_)))
            .find(|route| route.endpoint() == (method, path));
        if fixed.is_some() {
            return fixed;
        }

        if method != "GET" {
            return None;
        }
        let id = path.strip_prefix(CONTENT_PREFIX)?;
        // Positive ids only, no leading zeros
        if id.is_empty() || id.starts_with('0') || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        id.parse().ok().map(Route::ContentDetail)
    }

    /// `"METHOD path"` for each route, in table order
    pub fn listing() -> Vec<String> {
        Self::TABLE
            .iter()
            .map(|route| {
                let (method, path) = route.endpoint();
                format!("{} {}", method, path)
            })
            .collect()
    }

    fn handle(self, request: &RouteRequest) -> Result<RouteResponse, ApiError> {
        match self {
            Route::ApiTest => health::api_test(request),
            Route::Login => users::login(request),
            Route::Register => users::register(request),
            Route::CurrentUser => users::current_user(request),
            Route::DashboardOverview => content::dashboard_overview(request),
            Route::AssessmentQuestions => assessment::questions(request),
            Route::AssessmentSubmit => assessment::submit(request),
            Route::Recommendations => content::recommendations(request),
            Route::ContentDetail(id) => content::detail(id),
        }
    }
}

/// Route a request to its canned response
///
/// Preflight `OPTIONS` requests are answered before dispatch. Handler
/// failures are converted into `{detail}` responses here.
pub fn route(request: &RouteRequest) -> RouteResponse {
    if request.method == "OPTIONS" {
        return RouteResponse::empty(200);
    }

    let Some(route) = Route::resolve(&request.method, &request.path) else {
        tracing::info!("No route for {} {}", request.method, request.path);
        return RouteResponse::not_found(&request.method, &request.path);
    };

    tracing::info!("Request: {} {}", request.method, request.path);

    match route.handle(request) {
        Ok(response) => response,
        Err(err) => {
            match &err {
                ApiError::Authentication(detail) => {
                    tracing::warn!("Rejected {} {}: {}", request.method, request.path, detail)
                }
                ApiError::Internal(detail) => {
                    tracing::error!("Failed to handle {} {}: {}", request.method, request.path, detail)
                }
                _ => tracing::debug!("{} {} failed: {}", request.method, request.path, err),
            }
            RouteResponse::from_error(&err)
        }
    }
}
