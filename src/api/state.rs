//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::prediction::MaintenancePredictor;
use crate::yard::YardDb;

/// State shared by every handler
pub struct AppState {
    /// The yard store
    pub db: Arc<YardDb>,

    /// Maintenance predictor, fitted once at startup
    pub predictor: Arc<MaintenancePredictor>,

    /// Service configuration
    pub config: Config,
}

impl AppState {
    pub fn new(db: Arc<YardDb>, config: Config) -> Self {
        Self {
            db,
            predictor: Arc::new(MaintenancePredictor::new()),
            config,
        }
    }
}
