//! Shared application state.
//!
//! DESIGN
//! ======
//! Immutable after startup. The head metadata is computed once from the
//! configured public origin and cloned into every SSR render.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use vorrenti_client::util::seo::{HeadModel, PageLocation, PageMetadata};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Head elements rendered into every page.
    pub head: HeadModel,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let location = PageLocation::from_origin(&config.public_origin, "/");
        let head = HeadModel::from_metadata(&PageMetadata::vorrenti(), &location);
        Self { config: Arc::new(config), head }
    }
}
