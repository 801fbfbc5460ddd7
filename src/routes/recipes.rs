use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::suggest;
use crate::models::{
    FavoriteResponse, HealthResponse, RateRequest, RecommendRequest, RecommendResponse,
    SuggestionsResponse,
};
use crate::routes::{error_response, AppState};
use crate::services::{RecommendKey, StorageError};
use std::sync::Arc;

/// Configure all recipe-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recipes/recommend", web::post().to(recommend))
        .route("/recipes/suggestions", web::get().to(suggestions))
        .route("/recipes/{id}", web::get().to(get_recipe))
        .route("/recipes/{id}/favorite", web::post().to(toggle_favorite))
        .route("/recipes/{id}/rating", web::put().to(set_rating))
        .route("/user/data", web::get().to(get_user_data));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        recipes: state.catalog.len(),
        cache: state.cache.as_ref().map(|cache| cache.stats()),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank recipes for a pantry
///
/// POST /api/v1/recipes/recommend
///
/// Request body:
/// ```json
/// {
///   "pantry": ["tomato", "onion"],
///   "dietary": ["vegetarian"],
///   "maxTime": 30,
///   "difficulty": "easy",
///   "servings": 4
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let pantry = req.pantry();
    let filters = req.filters();
    let key = RecommendKey::new(&pantry, &filters);

    if let Some(cache) = &state.cache {
        if let Some(hit) = cache.get(&key).await {
            return HttpResponse::Ok().json(hit.as_ref());
        }
    }

    tracing::debug!(
        "Recommending for {} pantry items, filters: {:?}",
        pantry.len(),
        filters
    );

    let result = match state
        .recommender
        .recommend(state.catalog.recipes(), &pantry, &filters)
    {
        Ok(result) => result,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid servings", e.to_string());
        }
    };

    let response = Arc::new(RecommendResponse {
        recipes: result.recipes,
        total_results: result.total_candidates,
        servings: filters.servings,
    });

    tracing::info!(
        "Returning {} recipes (from {} candidates)",
        response.recipes.len(),
        response.total_results
    );

    if let Some(cache) = &state.cache {
        cache.insert(key, response.clone()).await;
    }

    HttpResponse::Ok().json(response.as_ref())
}

/// Suggestions from the user's rating history
///
/// GET /api/v1/recipes/suggestions
async fn suggestions(state: web::Data<AppState>) -> HttpResponse {
    let data = match state.user_data.data().await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Failed to load user data: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load user data",
                e.to_string(),
            );
        }
    };

    let result = suggest(
        state.catalog.recipes(),
        &data.ratings,
        &data.favorites,
        state.suggestion_limit,
    );

    HttpResponse::Ok().json(SuggestionsResponse {
        recipes: result.recipes,
        cuisines: result.cuisines,
    })
}

/// GET /api/v1/recipes/{id}
async fn get_recipe(state: web::Data<AppState>, path: web::Path<u32>) -> HttpResponse {
    let id = path.into_inner();
    match state.catalog.get(id) {
        Some(recipe) => HttpResponse::Ok().json(recipe),
        None => recipe_not_found(id),
    }
}

/// Toggle a recipe in the user's favorites
///
/// POST /api/v1/recipes/{id}/favorite
async fn toggle_favorite(state: web::Data<AppState>, path: web::Path<u32>) -> HttpResponse {
    let id = path.into_inner();
    if !state.catalog.contains(id) {
        return recipe_not_found(id);
    }

    match state.user_data.toggle_favorite(id).await {
        Ok((favorite, data)) => HttpResponse::Ok().json(FavoriteResponse {
            recipe_id: id,
            favorite,
            data,
        }),
        Err(e) => storage_failure(e),
    }
}

/// Rate a recipe
///
/// PUT /api/v1/recipes/{id}/rating
///
/// Request body:
/// ```json
/// { "rating": 4 }
/// ```
async fn set_rating(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    req: web::Json<RateRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let id = path.into_inner();
    if !state.catalog.contains(id) {
        return recipe_not_found(id);
    }

    match state.user_data.set_rating(id, req.rating).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => storage_failure(e),
    }
}

/// GET /api/v1/user/data
async fn get_user_data(state: web::Data<AppState>) -> HttpResponse {
    match state.user_data.data().await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => storage_failure(e),
    }
}

fn recipe_not_found(id: u32) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "Recipe not found",
        format!("No recipe with id {}", id),
    )
}

fn storage_failure(e: StorageError) -> HttpResponse {
    match e {
        StorageError::Rejected(reason) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid update", reason.to_string())
        }
        other => {
            tracing::error!("User data storage failed: {}", other);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update user data",
                other.to_string(),
            )
        }
    }
}
