use std::sync::Arc;

use crate::config::service_config::HandlerConfig;
use crate::error::{AppError, Result};
use crate::stores::{ProfileStore, VisitStore};

pub struct AppState {
    /// `None` when no connection URL could be loaded at startup.
    pub visits: Option<Arc<dyn VisitStore>>,
    pub profiles: Arc<dyn ProfileStore>,
    pub config: HandlerConfig,
}

impl AppState {
    pub fn visit_store(&self) -> Result<&dyn VisitStore> {
        self.visits.as_deref().ok_or(AppError::NotConfigured)
    }
}
