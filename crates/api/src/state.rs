//! Application state shared across handlers.

use std::sync::Arc;

use crm_core::Generator;

use crate::directory::ContactDirectory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Text generation gateway.
    pub gateway: Arc<dyn Generator>,
    /// Contact lookup.
    pub directory: Arc<dyn ContactDirectory>,
}

impl AppState {
    /// Create new application state.
    pub fn new(gateway: Arc<dyn Generator>, directory: Arc<dyn ContactDirectory>) -> Self {
        Self { gateway, directory }
    }
}
