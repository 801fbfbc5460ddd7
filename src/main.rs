use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use recipe_algo::config::Settings;
use recipe_algo::core::Recommender;
use recipe_algo::models::ErrorResponse;
use recipe_algo::routes::{self, AppState};
use recipe_algo::services::{
    Catalog, Classifier, HttpClassifier, JsonFileStore, LazyClassifier, MemoryStore,
    RecommendationCache, UserDataService, UserDataStore,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Handle JSON payload errors
fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let body = ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    };
    error::InternalError::from_response(err, HttpResponse::build(StatusCode::BAD_REQUEST).json(body)).into()
}

/// Handle query payload errors
fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    let body = ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    };
    error::InternalError::from_response(err, HttpResponse::build(StatusCode::BAD_REQUEST).json(body)).into()
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting recipe recommendation service...");

    let catalog = Catalog::load(&settings.catalog.path).await.map_err(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
        std::io::Error::other(e.to_string())
    })?;

    let store: Arc<dyn UserDataStore> = match &settings.storage.path {
        Some(path) => {
            info!("Persisting user data to {}", path);
            Arc::new(JsonFileStore::new(path))
        }
        None => {
            warn!("No storage path configured, user data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let classifier: Option<Arc<dyn Classifier>> = match settings.vision.endpoint.clone() {
        Some(endpoint) => {
            let timeout = settings.vision.timeout_secs;
            info!("Image recognition enabled ({})", endpoint);
            Some(Arc::new(LazyClassifier::new(move || {
                HttpClassifier::new(endpoint.clone(), timeout)
            })))
        }
        None => {
            info!("No vision endpoint configured, image recognition disabled");
            None
        }
    };

    let cache = if settings.cache.enabled {
        info!(
            "Recommendation cache enabled ({} entries, TTL: {}s)",
            settings.cache.capacity, settings.cache.ttl_secs
        );
        Some(Arc::new(RecommendationCache::new(
            settings.cache.capacity,
            settings.cache.ttl_secs,
        )))
    } else {
        None
    };

    let recommender = Recommender::new(
        settings.recommend.limit,
        settings.recommend.baseline_servings,
    );

    info!("Recommender initialized: {:?}", recommender);

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        recommender,
        cache,
        user_data: Arc::new(UserDataService::new(store)),
        classifier,
        suggestion_limit: settings.suggestions.limit,
        vision_top_n: settings.vision.top_n,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::PayloadConfig::new(10 * 1024 * 1024))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
