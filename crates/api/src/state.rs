use std::sync::Arc;

use infra::HallStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HallStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn HallStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn HallStore {
        self.store.as_ref()
    }
}
