// templates/pages/home.rs

use crate::domain::{FilterSettings, Listing};
use crate::favorites::FavoritesStore;
use crate::templates::{
    components::{card, favorites_panel, filter_controls, results_panel, search_form},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(
    results: &[Listing],
    filters: &FilterSettings,
    favorites: &FavoritesStore,
    searching: bool,
) -> Markup {
    desktop_layout(
        "Travel Finder",
        html! {
            (search_form(searching))
            main class="container" {
                section {
                    (filter_controls(filters))
                    h2 { "Results" }
                    div id="results" aria-live="polite" {
                        (results_panel(results, favorites))
                    }
                }
                aside id="favorites" {
                    (card("Saved trips", favorites_panel(favorites)))
                }
            }
        },
    )
}
