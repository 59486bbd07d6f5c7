//! Upload page

use dioxus::prelude::*;
use tracing::error;

use crate::api::RestClient;
use crate::components::{FileUpload, LoadingSpinner};
use crate::routes::Route;

/// Upload page - pick a PDF, send it to the extractor, then open the
/// document view for the id the backend assigned.
#[component]
pub fn Upload() -> Element {
    let navigator = use_navigator();
    let mut uploading = use_signal(|| false);
    let mut file_name = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);

    let handle_file = move |(name, bytes): (String, Vec<u8>)| {
        if !name.to_lowercase().ends_with(".pdf") {
            error_message.set(Some("Only PDF files are supported.".to_string()));
            return;
        }

        file_name.set(name.clone());
        spawn(async move {
            uploading.set(true);
            error_message.set(None);

            match RestClient::configured().upload(&name, bytes).await {
                Ok(document) => {
                    navigator.push(Route::DocumentTables {
                        pdf_id: document.id,
                    });
                }
                Err(err) => {
                    error!(error = %err, "upload failed");
                    error_message.set(Some(format!("Upload failed: {err}")));
                    uploading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            Link { to: Route::Home {}, class: "back-link", "\u{2190} Back" }
            h2 { "Upload a PDF" }

            if let Some(message) = error_message() {
                div { class: "error-banner", "{message}" }
            }

            if uploading() {
                div {
                    class: "upload-progress",
                    LoadingSpinner {}
                    p { "Extracting {file_name}..." }
                }
            } else {
                FileUpload { disabled: uploading(), on_file: handle_file }
            }
        }
    }
}
