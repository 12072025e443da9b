//! Maintenance prediction DTOs

use serde::{Deserialize, Serialize};

/// Features describing a moto's recent usage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub days_since_maintenance: f32,
    pub completed_deliveries: f32,
    pub breakdown_history: f32,
}

/// Estimated need for preventive maintenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub requires_maintenance: bool,
    pub probability: f32,
}
