//! Zona records and DTOs

use serde::{Deserialize, Serialize};

/// Zone record within a pátio
#[derive(Debug, Clone)]
pub struct Zona {
    pub id: i64,
    pub name: String,
    pub patio_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Zona joined with its owning pátio's name
#[derive(Debug, Clone)]
pub struct ZonaWithPatio {
    pub zona: Zona,
    pub patio_name: String,
}

/// Wire shape of a zona, with the pátio name eagerly resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonaDto {
    pub id: i64,
    pub name: String,
    pub patio_id: i64,
    pub patio_name: String,
}

impl ZonaDto {
    pub fn from_view(view: &ZonaWithPatio) -> Self {
        Self {
            id: view.zona.id,
            name: view.zona.name.clone(),
            patio_id: view.zona.patio_id,
            patio_name: view.patio_name.clone(),
        }
    }
}

/// Creation payload for a zona
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZona {
    pub name: String,
    pub patio_id: i64,
}

/// Update payload for a zona; only the name can change
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateZona {
    pub name: String,
}
