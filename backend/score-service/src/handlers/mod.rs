pub mod health;
pub mod score;

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::error::json_error_handler;
use crate::metrics::metrics_handler;
use crate::openapi::ApiDoc;

pub use score::calculate_score;

/// Register every route together with the JSON extractor configuration
pub fn configure_routes(cfg: &mut web::ServiceConfig, json_payload_limit: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(json_payload_limit)
            .error_handler(json_error_handler),
    )
    .route("/health", web::get().to(health::health))
    .route("/ready", web::get().to(health::ready))
    .route("/metrics", web::get().to(metrics_handler))
    .route(
        ApiDoc::openapi_json_path(),
        web::get().to(|| async { HttpResponse::Ok().json(ApiDoc::openapi()) }),
    )
    .route("/calculate", web::post().to(calculate_score));
}
