use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;
use crate::core::dedupe_top_n;
use crate::models::{ImageQuery, LabelsRequest, Pantry, PantryResponse, PantryTextRequest};
use crate::routes::{error_response, AppState};
use crate::services::{recognize_ingredients, VisionError};

/// Configure pantry-building routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/pantry/text", web::post().to(add_text))
        .route("/pantry/labels", web::post().to(add_labels))
        .route("/pantry/image", web::post().to(add_image));
}

fn merged(current: &[String], added: &[String]) -> Pantry {
    let mut pantry: Pantry = current.iter().collect();
    pantry.extend(added);
    pantry
}

/// Merge comma-separated typed ingredients into a pantry
///
/// POST /api/v1/pantry/text
async fn add_text(req: web::Json<PantryTextRequest>) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let items = Pantry::parse_text(&req.text);
    HttpResponse::Ok().json(PantryResponse {
        pantry: merged(&req.pantry, &items),
        recognized: items,
    })
}

/// Merge client-side classifier predictions into a pantry
///
/// POST /api/v1/pantry/labels
///
/// Request body:
/// ```json
/// {
///   "predictions": [{ "label": "Granny Smith", "confidence": 0.71 }],
///   "pantry": ["onion"]
/// }
/// ```
async fn add_labels(state: web::Data<AppState>, req: web::Json<LabelsRequest>) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let recognized = dedupe_top_n(&req.predictions, state.vision_top_n);
    tracing::debug!(
        "Mapped {} predictions to {:?}",
        req.predictions.len(),
        recognized
    );

    HttpResponse::Ok().json(PantryResponse {
        pantry: merged(&req.pantry, &recognized),
        recognized,
    })
}

/// Recognize ingredients in an uploaded image
///
/// POST /api/v1/pantry/image?pantry=onion,rice
///
/// The body is the raw image. On any recognition failure the response is an
/// error and carries no pantry, so the caller keeps the one it has.
async fn add_image(
    state: web::Data<AppState>,
    query: web::Query<ImageQuery>,
    body: web::Bytes,
) -> HttpResponse {
    let Some(classifier) = &state.classifier else {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Vision unavailable",
            "No image classifier is configured".to_string(),
        );
    };

    let recognized = match recognize_ingredients(classifier.as_ref(), &body, state.vision_top_n).await {
        Ok(recognized) => recognized,
        Err(VisionError::NoClassifiableContent) => {
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "No classifiable content",
                "Could not recognize anything in the image; add ingredients manually".to_string(),
            );
        }
        Err(e) => {
            tracing::warn!("Image recognition failed: {}", e);
            return error_response(
                StatusCode::BAD_GATEWAY,
                "Recognition failed",
                e.to_string(),
            );
        }
    };

    let current = query
        .pantry
        .as_deref()
        .map(Pantry::parse_text)
        .unwrap_or_default();

    tracing::info!("Recognized {:?} from a {} byte image", recognized, body.len());

    HttpResponse::Ok().json(PantryResponse {
        pantry: merged(&current, &recognized),
        recognized,
    })
}
