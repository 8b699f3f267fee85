// src/domain/generator.rs

use crate::domain::listing::Listing;
use chrono::Utc;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

pub const DEFAULT_LOCATION: &str = "Dream City";

const PRICE_MIN: u32 = 1500;
const PRICE_MAX: u32 = 23500;
const NIGHTS_MIN: u32 = 2;
const NIGHTS_MAX: u32 = 8;
const IMAGE_BASE: &str = "https://source.unsplash.com/collection/190727/800x600";
const DESCRIPTION: &str = "Comfortable stay with great location and reviews.";

// Batch counter keeps ids unique across calls made in the same millisecond.
static NEXT_BATCH: AtomicU64 = AtomicU64::new(0);

/// Produce `count` mock listings for `query` using the thread RNG.
pub fn generate(query: &str, count: usize, fallback_location: &str) -> Vec<Listing> {
    generate_with(&mut rand::thread_rng(), query, count, fallback_location)
}

/// Same as [`generate`] with a caller-supplied RNG.
///
/// The query only feeds the display text; a blank query uses
/// `fallback_location` instead.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    query: &str,
    count: usize,
    fallback_location: &str,
) -> Vec<Listing> {
    let city = match query.trim() {
        "" => fallback_location,
        q => q,
    };
    let stamp = Utc::now().timestamp_millis();
    let batch = NEXT_BATCH.fetch_add(1, Ordering::Relaxed);

    (0..count)
        .map(|i| Listing {
            id: format!("{stamp}-{batch}-{i}"),
            title: format!("{city} Stay #{}", i + 1),
            location: format!("{city}, Country"),
            price: rng.gen_range(PRICE_MIN..=PRICE_MAX),
            stars: rng.gen_range(1..=5),
            nights: rng.gen_range(NIGHTS_MIN..=NIGHTS_MAX),
            image: format!("{IMAGE_BASE}?sig={i}"),
            description: DESCRIPTION.to_string(),
        })
        .collect()
}
