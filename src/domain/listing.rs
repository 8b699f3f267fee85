use serde::{Deserialize, Serialize};

/// One synthetic travel offer. Identity is by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Smallest currency unit.
    pub price: u32,
    /// 1..=5
    pub stars: u8,
    pub nights: u32,
    pub image: String,
    pub description: String,
}
