use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::recommendation::action::Recommender;
use crate::support::agent::SupportAgent;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only fleet, built once at startup.
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
    pub support: SupportAgent,
    pub config: Config,
}

impl AppState {
    /// Wires every feature to the same catalog and model client.
    pub fn new(catalog: Arc<Catalog>, llm: Arc<dyn TextGenerator>, config: Config) -> Self {
        Self {
            recommender: Recommender::new(catalog.clone(), llm.clone()),
            support: SupportAgent::new(catalog.clone(), llm),
            catalog,
            config,
        }
    }
}
