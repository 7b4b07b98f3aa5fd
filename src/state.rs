use std::sync::Arc;

use axum::extract::FromRef;

use crate::catalog::Catalog;
use crate::store::ResultStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub store: Arc<dyn ResultStore>,
}

impl FromRef<AppState> for Catalog {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ResultStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
