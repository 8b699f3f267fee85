use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                header class="site-header" {
                    h3 { "Travel Finder" }
                    nav {
                        ul {
                            li { a href="/" { "Search" } }
                            li { a href="#favorites" { "Saved trips" } }
                        }
                    }
                }
                (content)
                div id="modal-content" {}
                footer {
                    "© " (Utc::now().year()) " Travel Finder. Listings are mocked."
                }
            }
        }
    }
}

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
.site-header { display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; box-shadow: 0 1px 4px #0002; }
.site-header ul { display: flex; gap: 16px; list-style: none; }
main { display: grid; grid-template-columns: 1fr 300px; gap: 24px; padding: 24px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; overflow: hidden; }
.card img { width: 100%; height: 160px; object-fit: cover; }
.card-body { padding: 12px; }
.card-meta, .fav-row, .modal-actions { display: flex; justify-content: space-between; align-items: center; }
.meta, .muted { color: #6b7280; font-size: 14px; }
.price { font-weight: 700; }
.htmx-indicator { display: none; padding: 18px; }
.htmx-request.htmx-indicator, .htmx-request .htmx-indicator { display: block; }
.modal { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; }
.modal-backdrop { position: absolute; inset: 0; background: #0008; }
.modal-panel { position: relative; background: #fff; border-radius: 8px; padding: 20px; max-width: 560px; width: 100%; }
.modal-image { width: 100%; height: 220px; object-fit: cover; border-radius: 8px; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
footer { padding: 24px; color: #6b7280; }
";
