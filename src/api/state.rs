//! Application state for the attrition engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::AttritionEngine;
use crate::models::{Dataset, FilterOptions};

/// Shared application state.
///
/// Holds the roster and the engine. Both are read-only, so handlers can
/// compute metrics concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
    engine: Arc<AttritionEngine>,
    filter_options: Arc<FilterOptions>,
}

impl AppState {
    /// Creates a new application state for a dataset and engine.
    pub fn new(dataset: Dataset, engine: AttritionEngine) -> Self {
        let filter_options = dataset.filter_options();
        Self {
            dataset: Arc::new(dataset),
            engine: Arc::new(engine),
            filter_options: Arc::new(filter_options),
        }
    }

    /// Returns the roster.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the engine.
    pub fn engine(&self) -> &AttritionEngine {
        &self.engine
    }

    /// Returns the filter options of the roster, computed once.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }
}
