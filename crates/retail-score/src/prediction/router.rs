use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::client::ScoringBackend;
use super::domain::{PincodeQuery, PredictionEnvelope, PredictionRequest, SUPPORTED_MODELS};
use super::service::{PredictionError, PredictionService};

/// Router builder exposing the prediction endpoints.
pub fn prediction_router<C>(service: Arc<PredictionService<C>>) -> Router
where
    C: ScoringBackend + 'static,
{
    Router::new()
        .route(
            "/predict",
            post(predict_handler::<C>).get(capability_handler),
        )
        .route("/pincode", post(pincode_handler::<C>))
        .with_state(service)
}

pub(crate) async fn predict_handler<C>(
    State(service): State<Arc<PredictionService<C>>>,
    Json(request): Json<PredictionRequest>,
) -> Response
where
    C: ScoringBackend + 'static,
{
    match service.predict(request).await {
        Ok(prediction) => {
            (StatusCode::OK, Json(PredictionEnvelope::completed(prediction))).into_response()
        }
        Err(error) => {
            let status = match error {
                PredictionError::MissingFields => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(PredictionEnvelope::failed(error.to_string()))).into_response()
        }
    }
}

/// Static capability descriptor for `GET /predict`.
pub(crate) async fn capability_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "FMCG Prediction API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST": "/predict - Submit prediction request",
        },
        "models": SUPPORTED_MODELS,
    }))
}

/// Display-only postal code lookup. Always 200: a failed lookup degrades to
/// an error-status body instead of failing the response.
pub(crate) async fn pincode_handler<C>(
    State(service): State<Arc<PredictionService<C>>>,
    Json(query): Json<PincodeQuery>,
) -> Response
where
    C: ScoringBackend + 'static,
{
    let lookup = service.lookup_pincode(&query.pincode).await;
    (StatusCode::OK, Json(lookup)).into_response()
}
