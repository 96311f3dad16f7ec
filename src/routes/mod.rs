// Route exports
pub mod assessment;
pub mod content;
pub mod dispatch;
pub mod health;
pub mod http;
pub mod users;

pub use dispatch::{default_headers, route, Route, RouteRequest, RouteResponse};

use actix_web::web;

/// Send every method and path to the router, which owns the route table
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(http::dispatch));
}
