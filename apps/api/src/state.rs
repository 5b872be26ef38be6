use std::sync::Arc;

use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record backend. Default: FileRecordStore rooted at RECORDS_DIR.
    pub store: Arc<dyn RecordStore>,
}
