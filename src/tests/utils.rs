use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::domain::Listing;
use crate::state::AppState;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh on-disk database with the production schema.
pub fn make_db(prefix: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{prefix}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// Defaults with the simulated latency switched off.
pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.search.latency_ms = 0;
    cfg
}

pub fn make_state(prefix: &str) -> AppState {
    AppState::new(make_db(prefix), &test_config())
}

/// State whose searches wait `latency_ms` before publishing.
pub fn make_slow_state(prefix: &str, latency_ms: u64) -> AppState {
    let mut cfg = test_config();
    cfg.search.latency_ms = latency_ms;
    AppState::new(make_db(prefix), &cfg)
}

pub fn listing(id: &str, price: u32, stars: u8) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Stay {id}"),
        location: "Lisbon, Country".to_string(),
        price,
        stars,
        nights: 3,
        image: "https://example.com/img.jpg".to_string(),
        description: "Test stay.".to_string(),
    }
}
