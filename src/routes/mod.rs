// Route exports
pub mod pantry;
pub mod recipes;

use actix_web::{http::StatusCode, web, HttpResponse};
use crate::core::Recommender;
use crate::models::ErrorResponse;
use crate::services::{Catalog, Classifier, RecommendationCache, UserDataService};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
    pub cache: Option<Arc<RecommendationCache>>,
    pub user_data: Arc<UserDataService>,
    pub classifier: Option<Arc<dyn Classifier>>,
    pub suggestion_limit: usize,
    pub vision_top_n: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recipes::configure)
            .configure(pantry::configure),
    );
}

/// JSON error body with a matching status code
pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}
