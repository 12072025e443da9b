//! Domain records and wire DTOs
//!
//! Records are what the store holds; DTOs are what goes over the wire.
//! Handlers map records (or joined views) to DTOs before wrapping them in
//! an envelope.

pub mod analytics;
pub mod moto;
pub mod patio;
pub mod zona;

pub use analytics::{PredictionRequest, PredictionResponse};
pub use moto::{CreateMoto, Moto, MotoDto, MotoWithLocation, MoveMoto, UpdateMoto};
pub use patio::{CreatePatio, Patio, PatioDto, UpdatePatio};
pub use zona::{CreateZona, UpdateZona, Zona, ZonaDto, ZonaWithPatio};
