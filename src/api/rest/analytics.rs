//! Analytics endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::prediction::MaintenanceFeatures;
use crate::types::{PredictionRequest, PredictionResponse};

/// POST /api/v1/analytics/maintenance-prediction - estimate whether a moto
/// needs preventive maintenance
pub async fn maintenance_prediction(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PredictionRequest>,
) -> Json<PredictionResponse> {
    let prediction = state.predictor.predict(&MaintenanceFeatures {
        days_since_maintenance: body.days_since_maintenance,
        completed_deliveries: body.completed_deliveries,
        breakdown_history: body.breakdown_history,
    });

    Json(PredictionResponse {
        requires_maintenance: prediction.requires_maintenance,
        probability: prediction.probability,
    })
}
