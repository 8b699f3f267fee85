use crate::domain::filters::{FilterSettings, MAX_STARS};
use maud::{html, Markup};

pub const PRICE_SLIDER_MAX: u32 = 25000;
const PRICE_SLIDER_STEP: u32 = 500;

/// `searching` shows the indicator without waiting for htmx, e.g. when the
/// page is reloaded while a search is still waiting.
pub fn search_form(searching: bool) -> Markup {
    let indicator = if searching {
        "htmx-indicator card htmx-request"
    } else {
        "htmx-indicator card"
    };

    html! {
        div class="search-wrapper" {
            form
                id="search-form"
                method="get"
                action="/search"
                hx-get="/search"
                hx-target="#results"
                hx-swap="innerHTML"
                hx-include="#filters"
                hx-indicator="#searching"
                hx-sync="this:replace"
                class="search"
            {
                label class="sr-only" for="q" { "Destination" }
                input
                    type="search"
                    id="q"
                    name="q"
                    placeholder="Where to? (e.g. Paris)"
                    autocomplete="off";

                label class="sr-only" for="from" { "Check-in" }
                input type="date" id="from" name="from";

                label class="sr-only" for="to" { "Check-out" }
                input type="date" id="to" name="to";

                label class="sr-only" for="guests" { "Guests" }
                input type="number" id="guests" name="guests" min="1" value="2";

                button type="submit" class="primary" {
                    span class="btn-text" { "Search" }
                }
            }

            div id="searching" class=(indicator) { "Searching…" }
        }
    }
}

/// Price ceiling and star floor. Any change re-runs the last search.
pub fn filter_controls(settings: &FilterSettings) -> Markup {
    html! {
        form
            id="filters"
            class="filters"
            hx-get="/filters"
            hx-trigger="change"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-indicator="#searching"
        {
            label for="price" {
                "Max price: ₹"
                output id="price-output" for="price" { (settings.max_price) }
            }
            input
                type="range"
                id="price"
                name="price"
                min="0"
                max=(PRICE_SLIDER_MAX)
                step=(PRICE_SLIDER_STEP)
                value=(settings.max_price)
                oninput="document.getElementById('price-output').textContent = this.value";

            label for="stars" { "Min stars" }
            select id="stars" name="stars" {
                @for n in 0..=MAX_STARS {
                    option value=(n) selected[settings.min_stars == n] {
                        @if n == 0 { "Any" } @else { (n) "+ ★" }
                    }
                }
            }
        }
    }
}
