use crate::domain::Listing;
use maud::{html, Markup};
use serde_json::json;

/// Detail view swapped into `#modal-content`.
pub fn listing_modal(item: &Listing) -> Markup {
    html! {
        div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title" {
            div class="modal-backdrop" onclick="this.parentElement.remove()" {}
            div class="modal-panel" {
                button
                    class="modal-close"
                    aria-label="Close"
                    onclick="this.closest('.modal').remove()"
                { "×" }
                h3 id="modal-title" { (item.title) }
                p class="meta" { (item.location) }
                img class="modal-image" src=(item.image) alt="";
                p { (item.description) }
                div class="modal-actions" {
                    div class="price" { "₹" (item.price) }
                    button
                        id="book-now"
                        hx-post="/book"
                        hx-vals=(json!({ "id": &item.id }).to_string())
                        hx-target="#book-result"
                    { "Book" }
                }
                div id="book-result" {}
            }
        }
    }
}

pub fn booking_placeholder() -> Markup {
    html! {
        p class="muted" { "Booking is not available yet." }
    }
}
