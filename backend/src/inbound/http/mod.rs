//! HTTP inbound adapter exposing the REST endpoints and landing page.

pub mod coerce;
pub mod cors;
pub mod error;
pub mod exercises;
pub mod extract;
pub mod health;
pub mod landing;
pub mod logs;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;

use actix_web::http::Method;
use actix_web::web;

pub use error::ApiResult;

/// Register extractor configuration, the API handlers, the probes, and the
/// landing page. Callers provide `HttpState`, `HealthState` and `LandingPage`
/// as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extract::json_config())
        .app_data(extract::form_config())
        .app_data(extract::query_config())
        .app_data(extract::path_config())
        .service(users::list_users)
        .service(users::create_user)
        .service(exercises::create_exercise)
        .service(logs::get_logs)
        .service(health::ready)
        .service(health::live)
        .service(landing::index)
        .route(
            "/api/{tail:.*}",
            web::method(Method::OPTIONS).to(cors::preflight),
        );
}
