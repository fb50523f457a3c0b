use crate::product::ProductStore;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }
}
