//! Pátio records and DTOs

use serde::{Deserialize, Serialize};

/// Logistics yard record
#[derive(Debug, Clone)]
pub struct Patio {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Wire shape of a pátio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatioDto {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl PatioDto {
    pub fn from_record(patio: &Patio) -> Self {
        Self {
            id: patio.id,
            name: patio.name.clone(),
            city: patio.city.clone(),
            state: patio.state.clone(),
        }
    }
}

/// Creation payload for a pátio
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatio {
    pub name: String,
    pub city: String,
    pub state: String,
}

/// Update payload for a pátio
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatio {
    pub name: String,
    pub city: String,
    pub state: String,
}
