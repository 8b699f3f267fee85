use crate::domain::Listing;
use crate::favorites::FavoritesStore;
use crate::responses::FAVORITES_CHANGED;
use maud::{html, Markup};
use serde_json::json;

/// Count plus the card grid; this is what `#results` is swapped with.
pub fn results_panel(items: &[Listing], favorites: &FavoritesStore) -> Markup {
    html! {
        p class="muted" id="results-count" { "(" (items.len()) ")" }
        @if items.is_empty() {
            div class="card" style="padding:20px" {
                p class="muted" { "No results. Try searching or relax the filters." }
            }
        } @else {
            div class="grid" {
                @for item in items {
                    (listing_card(item, favorites.is_favorite(&item.id)))
                }
            }
        }
    }
}

pub fn listing_card(item: &Listing, saved: bool) -> Markup {
    html! {
        article class="card" {
            img src=(item.image) alt=(format!("Photo of {}", item.title));
            div class="card-body" {
                h4 { (item.title) }
                div class="meta" { (item.location) " • " (item.nights) " nights" }
                div class="card-meta" {
                    div class="price" { "₹" (item.price) }
                    div class="meta" { (item.stars) " ★" }
                }
                p class="meta" { (item.description) }
                div class="card-actions" {
                    button
                        class="btn-view"
                        hx-get=(format!("/listings/{}", item.id))
                        hx-target="#modal-content"
                        hx-swap="innerHTML"
                    { "View" }
                    (save_button(&item.id, saved))
                }
            }
        }
    }
}

/// Save/Saved toggle. The wrapper refreshes itself whenever the saved list
/// changes elsewhere on the page.
pub fn save_button(id: &str, saved: bool) -> Markup {
    html! {
        span
            class="save-slot"
            hx-get=(format!("/favorites/button/{id}"))
            hx-trigger=(format!("{FAVORITES_CHANGED} from:body"))
            hx-swap="outerHTML"
        {
            button
                class="btn-save"
                data-id=(id)
                hx-post="/favorites/toggle"
                hx-vals=(json!({ "id": id }).to_string())
                hx-target="closest .save-slot"
                hx-swap="outerHTML"
            {
                @if saved { "Saved" } @else { "Save" }
            }
        }
    }
}
