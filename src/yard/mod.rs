//! Yard store - thread-safe in-memory record tables
//!
//! Holds the pátio, zona and moto tables behind a single lock, assigns ids,
//! enforces foreign-key checks and produces joined views (zona with its
//! pátio, moto with its full location). Reads within one request see every
//! write that completed before them.

mod crud;
mod seed;

use parking_lot::RwLock;
use thiserror::Error;

use crate::types::{
    CreateMoto, CreatePatio, CreateZona, Moto, MotoWithLocation, Patio, UpdateMoto, UpdatePatio,
    UpdateZona, Zona, ZonaWithPatio,
};

/// Write failure, mapped onto an HTTP status by the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The target record does not exist
    #[error("record not found")]
    NotFound,
    /// A referenced record does not exist
    #[error("referenced record not found")]
    DanglingReference,
}

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) patios: Vec<Patio>,
    pub(crate) zonas: Vec<Zona>,
    pub(crate) motos: Vec<Moto>,
    pub(crate) next_patio_id: i64,
    pub(crate) next_zona_id: i64,
    pub(crate) next_moto_id: i64,
}

/// In-memory yard store
pub struct YardDb {
    pub(crate) tables: RwLock<Tables>,
}

impl YardDb {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Create a store pre-loaded with the demo yard layout
    pub fn seeded() -> Self {
        let db = Self::new();
        seed::initialize(&db);
        db
    }

    /// Load the demo yard layout if the store is empty
    pub fn seed(&self) {
        seed::initialize(self);
    }

    /// Record counts as (pátios, zonas, motos)
    pub fn counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read();
        (tables.patios.len(), tables.zonas.len(), tables.motos.len())
    }
}

impl Default for YardDb {
    fn default() -> Self {
        Self::new()
    }
}

// Facade over the operations in crud.rs
impl YardDb {
    // Pátios
    pub fn list_patios(&self, offset: i64, limit: i64) -> (Vec<Patio>, i64) {
        crud::list_patios(self, offset, limit)
    }

    pub fn find_patio(&self, id: i64) -> Option<Patio> {
        crud::find_patio(self, id)
    }

    pub fn patio_exists(&self, id: i64) -> bool {
        crud::patio_exists(self, id)
    }

    pub fn insert_patio(&self, new: CreatePatio) -> Patio {
        crud::insert_patio(self, new)
    }

    pub fn update_patio(&self, id: i64, update: UpdatePatio) -> Result<(), WriteError> {
        crud::update_patio(self, id, update)
    }

    pub fn delete_patio(&self, id: i64) -> Result<(), WriteError> {
        crud::delete_patio(self, id)
    }

    // Zonas
    pub fn list_zonas(&self, offset: i64, limit: i64) -> (Vec<ZonaWithPatio>, i64) {
        crud::list_zonas(self, offset, limit)
    }

    pub fn find_zona(&self, id: i64) -> Option<ZonaWithPatio> {
        crud::find_zona(self, id)
    }

    pub fn zonas_by_patio(&self, patio_id: i64) -> Option<Vec<ZonaWithPatio>> {
        crud::zonas_by_patio(self, patio_id)
    }

    pub fn insert_zona(&self, new: CreateZona) -> Result<ZonaWithPatio, WriteError> {
        crud::insert_zona(self, new)
    }

    pub fn update_zona(&self, id: i64, update: UpdateZona) -> Result<(), WriteError> {
        crud::update_zona(self, id, update)
    }

    pub fn delete_zona(&self, id: i64) -> Result<(), WriteError> {
        crud::delete_zona(self, id)
    }

    // Motos
    pub fn list_motos(&self, offset: i64, limit: i64) -> (Vec<MotoWithLocation>, i64) {
        crud::list_motos(self, offset, limit)
    }

    pub fn find_moto(&self, id: i64) -> Option<MotoWithLocation> {
        crud::find_moto(self, id)
    }

    pub fn motos_by_zona(&self, zona_id: i64) -> Option<Vec<MotoWithLocation>> {
        crud::motos_by_zona(self, zona_id)
    }

    pub fn insert_moto(&self, new: CreateMoto) -> Result<MotoWithLocation, WriteError> {
        crud::insert_moto(self, new)
    }

    pub fn update_moto(&self, id: i64, update: UpdateMoto) -> Result<(), WriteError> {
        crud::update_moto(self, id, update)
    }

    pub fn delete_moto(&self, id: i64) -> Result<(), WriteError> {
        crud::delete_moto(self, id)
    }

    pub fn move_moto(&self, id: i64, new_zona_id: i64) -> Result<(), WriteError> {
        crud::move_moto(self, id, new_zona_id)
    }
}
