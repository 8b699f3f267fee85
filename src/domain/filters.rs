// src/domain/filters.rs

use crate::domain::listing::Listing;
use crate::errors::ServerError;

pub const MAX_STARS: u8 = 5;

/// The user's current price ceiling and star floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSettings {
    pub max_price: u32,
    pub min_stars: u8,
}

impl FilterSettings {
    pub fn new(max_price: u32, min_stars: u8) -> Self {
        Self {
            max_price,
            min_stars: min_stars.min(MAX_STARS),
        }
    }

    pub fn matches(&self, item: &Listing) -> bool {
        item.price <= self.max_price && item.stars >= self.min_stars
    }

    /// Overwrite whichever controls were submitted. Missing or blank values
    /// leave the current setting alone.
    pub fn update_from_params(
        &mut self,
        price: Option<&str>,
        stars: Option<&str>,
    ) -> Result<(), ServerError> {
        if let Some(raw) = price.map(str::trim).filter(|s| !s.is_empty()) {
            self.max_price = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid price '{raw}'")))?;
        }
        if let Some(raw) = stars.map(str::trim).filter(|s| !s.is_empty()) {
            let stars: u8 = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid stars '{raw}'")))?;
            self.min_stars = stars.min(MAX_STARS);
        }
        Ok(())
    }
}

/// Keep the listings within the price ceiling and at or above the star floor,
/// in their original order.
pub fn apply_filters(items: &[Listing], settings: &FilterSettings) -> Vec<Listing> {
    items
        .iter()
        .filter(|it| settings.matches(it))
        .cloned()
        .collect()
}
