use crate::favorites::FavoritesStore;
use crate::responses::FAVORITES_CHANGED;
use maud::{html, Markup};
use serde_json::json;

pub fn favorites_panel(favorites: &FavoritesStore) -> Markup {
    html! {
        ul
            id="favorites-list"
            hx-get="/favorites"
            hx-trigger=(format!("{FAVORITES_CHANGED} from:body"))
            hx-swap="outerHTML"
        {
            @if favorites.is_empty() {
                li class="muted" { "No saved trips yet." }
            }
            @for fav in favorites.list() {
                li {
                    div class="fav-row" {
                        div {
                            strong { (fav.title) }
                            div class="meta" { (fav.location) }
                        }
                        button
                            class="fav-remove"
                            data-id=(fav.id)
                            hx-post="/favorites/remove"
                            hx-vals=(json!({ "id": &fav.id }).to_string())
                            hx-target="#favorites-list"
                            hx-swap="outerHTML"
                        { "Remove" }
                    }
                }
            }
        }
    }
}
