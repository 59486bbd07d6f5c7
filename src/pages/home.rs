//! Landing page

use dioxus::prelude::*;

use crate::routes::Route;

/// Landing page - product blurb and the two entry points
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page hero",
            h1 { class: "hero-title", "TableLens" }
            p {
                class: "hero-tagline",
                "Upload a PDF and explore every table the extractor finds, with per-column statistics and one-click JSON export."
            }
            div {
                class: "hero-actions",
                Link { to: Route::Upload {}, class: "btn primary", "Upload a PDF" }
                Link { to: Route::History {}, class: "btn", "Uploaded PDFs" }
            }
        }
    }
}
