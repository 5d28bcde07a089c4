mod error;

use std::sync::Arc;

use roster_database::PlayerStore;

pub use error::{Result, ServiceError};

/// Shared handle given to every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlayerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }
}
