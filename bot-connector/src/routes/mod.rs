//! HTTP routing
//!
//! Each resource exposes a static table of `RouteDescriptor`s. Every bound
//! handler runs its validator to completion before touching a controller,
//! so a request that fails validation is answered with a 400 and never
//! reaches business logic.

pub mod bots;
pub mod channels;
pub mod health;

use actix_web::error::JsonPayloadError;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, Route};
use serde::Serialize;

use crate::error::ApiError;

/// One entry of a route table
pub struct RouteDescriptor {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    /// Attaches the validate-then-handle function to a method-guarded route
    pub bind: fn(Route) -> Route,
}

/// Success envelope shared by every resource
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub results: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(results: T, message: impl Into<String>) -> Self {
        Self {
            results,
            message: message.into(),
        }
    }
}

pub(crate) fn register(cfg: &mut web::ServiceConfig, routes: &'static [RouteDescriptor]) {
    for route in routes {
        cfg.route(route.path, (route.bind)(web::route().method(route.method.clone())));
    }
}

/// Every resource route, in registration order
pub fn all_routes() -> impl Iterator<Item = &'static RouteDescriptor> {
    bots::BOT_ROUTES.iter().chain(channels::CHANNEL_ROUTES.iter())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    health::config(cfg);
    bots::config(cfg);
    channels::config(cfg);
}

/// Malformed bodies are validation failures too
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

pub async fn not_found() -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::NotFound("Route not found".to_string()))
}
