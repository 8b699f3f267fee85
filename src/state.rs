use crate::config::AppConfig;
use crate::db::Database;
use crate::domain::FilterSettings;
use crate::errors::ServerError;
use crate::favorites::FavoritesStore;
use crate::search::SearchOrchestrator;
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything a request handler may touch, shared across astra workers.
#[derive(Debug)]
pub struct AppState {
    favorites: Mutex<FavoritesStore>,
    filters: Arc<Mutex<FilterSettings>>,
    pub search: SearchOrchestrator,
}

impl AppState {
    /// Loads the saved list once; the store is the only owner afterwards.
    pub fn new(db: Database, cfg: &AppConfig) -> Self {
        let favorites = FavoritesStore::load(db, cfg.storage.favorites_slot.clone());
        let filters = Arc::new(Mutex::new(cfg.filters.initial_settings()));
        let search = SearchOrchestrator::new(cfg.search.clone(), Arc::clone(&filters));

        Self {
            favorites: Mutex::new(favorites),
            filters,
            search,
        }
    }

    pub fn favorites(&self) -> MutexGuard<'_, FavoritesStore> {
        self.favorites.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn filters(&self) -> FilterSettings {
        *self.filters.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Apply submitted filter controls. Nothing changes if either value is invalid.
    pub fn update_filters(
        &self,
        price: Option<&str>,
        stars: Option<&str>,
    ) -> Result<FilterSettings, ServerError> {
        let mut guard = self.filters.lock().unwrap_or_else(|p| p.into_inner());
        let mut next = *guard;
        next.update_from_params(price, stars)?;
        *guard = next;
        Ok(next)
    }
}
