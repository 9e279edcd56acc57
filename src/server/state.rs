//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::vcon::{MemoryStore, VconSource};

/// Shared application state.
pub struct AppState {
    /// Read-only conversation records.
    pub store: Arc<dyn VconSource>,
}

impl AppState {
    /// Create state over the given record source.
    #[must_use]
    pub fn new(store: Arc<dyn VconSource>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// Create state over the built-in sample records.
    #[must_use]
    pub fn seeded() -> Arc<Self> {
        Self::new(Arc::new(MemoryStore::seeded()))
    }
}
