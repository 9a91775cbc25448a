use std::sync::Arc;

use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one completion client for the process lifetime. Trait object so
    /// tests can swap in a stub.
    pub llm: Arc<dyn CompletionBackend>,
}
