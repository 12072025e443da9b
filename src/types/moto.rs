//! Moto records and DTOs

use serde::{Deserialize, Serialize};

/// Motorcycle record tracked in the yard.
///
/// Status is free-form (`Ativa`, `Manutenção`, `Inativa` by convention).
/// An unallocated moto has no zona.
#[derive(Debug, Clone)]
pub struct Moto {
    pub id: i64,
    pub plate: String,
    pub model: String,
    pub status: String,
    pub zona_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Moto joined with its zona and pátio, when allocated
#[derive(Debug, Clone)]
pub struct MotoWithLocation {
    pub moto: Moto,
    pub zona_name: Option<String>,
    pub patio_id: Option<i64>,
    pub patio_name: Option<String>,
}

/// Wire shape of a moto with its resolved location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoDto {
    pub id: i64,
    pub plate: String,
    pub model: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patio_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patio_name: Option<String>,
}

impl MotoDto {
    pub fn from_view(view: &MotoWithLocation) -> Self {
        Self {
            id: view.moto.id,
            plate: view.moto.plate.clone(),
            model: view.moto.model.clone(),
            status: view.moto.status.clone(),
            zona_id: view.moto.zona_id,
            zona_name: view.zona_name.clone(),
            patio_id: view.patio_id,
            patio_name: view.patio_name.clone(),
        }
    }
}

/// Creation payload for a moto; the zona is optional
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoto {
    pub plate: String,
    pub model: String,
    pub status: String,
    pub zona_id: Option<i64>,
}

/// Update payload for a moto
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMoto {
    pub plate: String,
    pub model: String,
    pub status: String,
    pub zona_id: Option<i64>,
}

/// Relocation payload: move a moto to another zona
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveMoto {
    pub new_zona_id: i64,
}
