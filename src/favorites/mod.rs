mod store;

pub use store::{FavoritesStore, DEFAULT_SLOT};
