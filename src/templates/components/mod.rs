use maud::{html, Markup};

pub mod error;
pub mod favorites;
pub mod listing_card;
pub mod modal;
pub mod search_form;

pub use error::error_page;
pub use favorites::favorites_panel;
pub use listing_card::{results_panel, save_button};
pub use modal::{booking_placeholder, listing_modal};
pub use search_form::{filter_controls, search_form};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
