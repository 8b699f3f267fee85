// src/favorites/store.rs
use crate::db::storage::{read_slot, write_slot};
use crate::db::Database;
use crate::domain::Listing;
use crate::errors::ServerError;
use std::collections::HashSet;

pub const DEFAULT_SLOT: &str = "tf_favs";

/// Saved listings, most recently added first, unique by id.
///
/// Every mutation rewrites the whole storage slot before returning.
#[derive(Debug)]
pub struct FavoritesStore {
    db: Database,
    slot: String,
    items: Vec<Listing>,
}

impl FavoritesStore {
    /// Read the persisted list once. Anything unreadable starts empty.
    pub fn load(db: Database, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let items = match read_slot(&db, &slot) {
            Ok(Some(raw)) => parse_items(&slot, &raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(%slot, error = %e, "favorites unreadable, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(%slot, count = items.len(), "favorites loaded");
        Self { db, slot, items }
    }

    pub fn list(&self) -> &[Listing] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.items.iter().any(|f| f.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Save `item` if it isn't saved yet, otherwise un-save it.
    /// Returns whether the item is saved afterwards.
    pub fn toggle(&mut self, item: &Listing) -> Result<bool, ServerError> {
        let exists = self.is_favorite(&item.id);
        let next: Vec<Listing> = if exists {
            self.without(&item.id)
        } else {
            std::iter::once(item.clone())
                .chain(self.items.iter().cloned())
                .collect()
        };

        self.commit(next)?;
        tracing::info!(id = %item.id, saved = !exists, "favorite toggled");
        Ok(!exists)
    }

    /// Drop the entry with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Result<(), ServerError> {
        let next = self.without(id);
        self.commit(next)?;
        tracing::info!(%id, "favorite removed");
        Ok(())
    }

    fn without(&self, id: &str) -> Vec<Listing> {
        self.items.iter().filter(|f| f.id != id).cloned().collect()
    }

    // Persist first; memory only changes once storage has the new list.
    fn commit(&mut self, next: Vec<Listing>) -> Result<(), ServerError> {
        let raw = serde_json::to_string(&next)
            .map_err(|e| ServerError::DbError(format!("serialize favorites failed: {e}")))?;
        write_slot(&self.db, &self.slot, &raw)?;
        self.items = next;
        Ok(())
    }
}

fn parse_items(slot: &str, raw: &str) -> Vec<Listing> {
    let parsed: Vec<Listing> = match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(%slot, error = %e, "favorites corrupt, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    parsed
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}
