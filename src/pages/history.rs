//! Uploaded-documents listing

use dioxus::prelude::*;
use tracing::error;

use crate::api::RestClient;
use crate::components::LoadingSpinner;
use crate::routes::Route;

/// History page - every document the backend knows about
#[component]
pub fn History() -> Element {
    let documents = use_resource(|| async {
        let result = RestClient::configured().documents().await;
        if let Err(err) = &result {
            error!(error = %err, "document list fetch failed");
        }
        result
    });

    let body = match &*documents.read() {
        None => rsx! {
            LoadingSpinner {}
        },
        Some(Err(err)) => rsx! {
            div {
                class: "error-banner",
                "Could not load the document list: {err}"
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "empty", "No PDFs uploaded yet." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "doc-list",
                for doc in list.iter() {
                    Link {
                        key: "{doc.id}",
                        to: Route::DocumentTables { pdf_id: doc.id },
                        class: "doc-card",
                        h3 { "PDF #{doc.id}" }
                        p { class: "doc-filename", "{doc.filename}" }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            Link { to: Route::Home {}, class: "back-link", "\u{2190} Back" }
            h2 { "Uploaded PDFs" }
            Link { to: Route::Upload {}, class: "btn primary", "Upload new PDF" }

            {body}
        }
    }
}
